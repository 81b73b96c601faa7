use iced::{Point, Size};

/// Place a dropdown below its trigger, shifted left when it would run
/// past the right edge of `area`.
pub(crate) fn dropdown_anchor(
    trigger: Point,
    area: Size,
    menu_width: f32,
    menu_height: f32,
    margin: f32,
) -> Point {
    let max_x = (area.width - menu_width - margin).max(margin);
    let max_y = (area.height - menu_height - margin).max(trigger.y);

    Point::new(trigger.x.clamp(margin, max_x), trigger.y.clamp(0.0, max_y))
}

/// Total menu height for the given rows.
pub(crate) fn menu_height_for_rows(
    item_count: usize,
    item_height: f32,
    separator_count: usize,
    separator_height: f32,
    vertical_padding: f32,
) -> f32 {
    vertical_padding
        + item_height * item_count as f32
        + separator_height * separator_count as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU_WIDTH: f32 = 220.0;
    const MENU_MARGIN: f32 = 6.0;

    #[test]
    fn given_space_available_when_anchoring_then_dropdown_sits_under_trigger()
    {
        let area = Size::new(800.0, 600.0);
        let trigger = Point::new(90.0, 30.0);

        let anchor =
            dropdown_anchor(trigger, area, MENU_WIDTH, 140.0, MENU_MARGIN);

        assert_eq!(anchor, trigger);
    }

    #[test]
    fn given_trigger_near_right_edge_when_anchoring_then_dropdown_stays_inside()
    {
        let area = Size::new(400.0, 300.0);
        let trigger = Point::new(350.0, 30.0);

        let anchor =
            dropdown_anchor(trigger, area, MENU_WIDTH, 140.0, MENU_MARGIN);

        assert!(anchor.x + MENU_WIDTH <= area.width - MENU_MARGIN + 0.1);
        assert_eq!(anchor.y, trigger.y);
    }

    #[test]
    fn given_tiny_area_when_anchoring_then_dropdown_never_moves_above_trigger()
    {
        let area = Size::new(100.0, 80.0);
        let trigger = Point::new(50.0, 30.0);

        let anchor =
            dropdown_anchor(trigger, area, MENU_WIDTH, 140.0, MENU_MARGIN);

        assert_eq!(anchor.x, MENU_MARGIN);
        assert_eq!(anchor.y, trigger.y);
    }

    #[test]
    fn given_rows_when_measuring_menu_then_height_adds_up() {
        let height = menu_height_for_rows(5, 24.0, 2, 9.0, 16.0);

        assert!((height - (16.0 + 120.0 + 18.0)).abs() < f32::EPSILON);
    }
}
