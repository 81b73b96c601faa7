use super::event::{MenuBarEffect, MenuBarIntent};
use super::state::MenuBarState;

/// Reduce a menu bar intent into state updates and an optional effect.
pub(super) fn reduce(
    state: &mut MenuBarState,
    intent: MenuBarIntent,
) -> Option<MenuBarEffect> {
    match intent {
        MenuBarIntent::Open(menu) => {
            state.open(menu);
            None
        },
        MenuBarIntent::Close => {
            state.close();
            None
        },
        MenuBarIntent::Toggle(menu) => {
            if state.is_open(menu) {
                state.close();
            } else {
                state.open(menu);
            }
            None
        },
        MenuBarIntent::HoverEnter(menu) => {
            if state.open_menu().is_some_and(|open| open != menu) {
                state.open(menu);
            }
            None
        },
        MenuBarIntent::HoverLeave(menu) => {
            // A leave from a menu that is no longer open is stale.
            if state.is_open(menu) {
                state.close();
            }
            None
        },
        MenuBarIntent::Select(item) => {
            if item.disabled {
                return None;
            }

            let effect = item.action.map(MenuBarEffect::Activate);
            state.close();
            effect
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::text::EditCommand;
    use crate::widgets::menu_bar::model::{
        MenuAction, MenuContext, MenuEntry, MenuId, MenuItem, menu_entries,
    };

    fn item(menu: MenuId, label: &str, ctx: &MenuContext) -> MenuItem {
        menu_entries(menu, ctx)
            .into_iter()
            .find_map(|entry| match entry {
                MenuEntry::Item(item) if item.label == label => Some(item),
                _ => None,
            })
            .unwrap_or_else(|| panic!("missing menu item {label}"))
    }

    #[test]
    fn given_closed_bar_when_toggled_twice_then_menu_closes_again() {
        let mut state = MenuBarState::default();

        let _ = reduce(&mut state, MenuBarIntent::Toggle(MenuId::File));
        assert_eq!(state.open_menu(), Some(MenuId::File));

        let _ = reduce(&mut state, MenuBarIntent::Toggle(MenuId::File));
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn given_open_menu_when_toggling_another_then_only_the_other_is_open() {
        let mut state = MenuBarState::default();
        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::File));

        let _ = reduce(&mut state, MenuBarIntent::Toggle(MenuId::View));

        assert_eq!(state.open_menu(), Some(MenuId::View));
    }

    #[test]
    fn given_open_menu_when_opened_again_then_state_is_unchanged() {
        let mut state = MenuBarState::default();
        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::Edit));

        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::Edit));

        assert_eq!(state.open_menu(), Some(MenuId::Edit));
    }

    #[test]
    fn given_closed_bar_when_closed_then_nothing_happens() {
        let mut state = MenuBarState::default();

        let effect = reduce(&mut state, MenuBarIntent::Close);

        assert!(effect.is_none());
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn given_mixed_open_and_toggle_sequence_when_reduced_then_at_most_one_menu_is_open()
     {
        let mut state = MenuBarState::default();
        let sequence = [
            MenuBarIntent::Open(MenuId::File),
            MenuBarIntent::Toggle(MenuId::Edit),
            MenuBarIntent::Toggle(MenuId::Edit),
            MenuBarIntent::Open(MenuId::Window),
            MenuBarIntent::Toggle(MenuId::File),
            MenuBarIntent::Open(MenuId::View),
            MenuBarIntent::Toggle(MenuId::View),
        ];
        let expected = [
            Some(MenuId::File),
            Some(MenuId::Edit),
            None,
            Some(MenuId::Window),
            Some(MenuId::File),
            Some(MenuId::View),
            None,
        ];

        for (intent, expected) in sequence.into_iter().zip(expected) {
            let _ = reduce(&mut state, intent);
            assert_eq!(state.open_menu(), expected);
        }
    }

    #[test]
    fn given_file_open_when_hovering_edit_then_edit_opens() {
        let mut state = MenuBarState::default();
        let _ = reduce(&mut state, MenuBarIntent::Toggle(MenuId::File));

        let _ = reduce(&mut state, MenuBarIntent::HoverEnter(MenuId::Edit));

        assert_eq!(state.open_menu(), Some(MenuId::Edit));
    }

    #[test]
    fn given_closed_bar_when_hovering_then_nothing_opens() {
        let mut state = MenuBarState::default();

        let _ = reduce(&mut state, MenuBarIntent::HoverEnter(MenuId::Edit));

        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn given_switch_to_sibling_when_stale_leave_arrives_then_sibling_stays_open()
     {
        let mut state = MenuBarState::default();
        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::File));
        let _ = reduce(&mut state, MenuBarIntent::HoverEnter(MenuId::Edit));

        let _ = reduce(&mut state, MenuBarIntent::HoverLeave(MenuId::File));

        assert_eq!(state.open_menu(), Some(MenuId::Edit));
    }

    #[test]
    fn given_open_dropdown_when_pointer_returns_to_sibling_title_then_sibling_opens()
     {
        let mut state = MenuBarState::default();
        // Click File, travel down into its dropdown, then back up over
        // the File title and on to Edit without leaving the region.
        let sequence = [
            MenuBarIntent::Toggle(MenuId::File),
            MenuBarIntent::HoverEnter(MenuId::File),
            MenuBarIntent::HoverEnter(MenuId::Edit),
        ];

        for intent in sequence {
            let _ = reduce(&mut state, intent);
        }

        assert_eq!(state.open_menu(), Some(MenuId::Edit));

        let _ = reduce(&mut state, MenuBarIntent::HoverLeave(MenuId::Edit));
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn given_open_menu_when_its_dropdown_is_left_then_menu_closes() {
        let mut state = MenuBarState::default();
        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::View));

        let _ = reduce(&mut state, MenuBarIntent::HoverLeave(MenuId::View));

        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn given_enabled_item_when_selected_then_activates_and_closes() {
        let mut state = MenuBarState::default();
        let ctx = MenuContext::default();
        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::View));

        let effect = reduce(
            &mut state,
            MenuBarIntent::Select(item(MenuId::View, "Zoom In", &ctx)),
        );

        assert_eq!(effect, Some(MenuBarEffect::Activate(MenuAction::ZoomIn)));
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn given_disabled_item_when_selected_then_nothing_is_activated_and_menu_stays()
     {
        let mut state = MenuBarState::default();
        let ctx = MenuContext::default();
        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::Edit));
        let copy = item(MenuId::Edit, "Copy", &ctx);
        assert!(copy.disabled);

        let effect = reduce(&mut state, MenuBarIntent::Select(copy));

        assert!(effect.is_none());
        assert_eq!(state.open_menu(), Some(MenuId::Edit));
    }

    #[test]
    fn given_item_without_action_when_selected_then_menu_still_closes() {
        let mut state = MenuBarState::default();
        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::Window));
        let item = MenuItem {
            label: "About",
            shortcut: None,
            action: None,
            disabled: false,
        };

        let effect = reduce(&mut state, MenuBarIntent::Select(item));

        assert!(effect.is_none());
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn given_selection_when_copy_selected_then_edit_command_is_activated() {
        let mut state = MenuBarState::default();
        let ctx = MenuContext {
            has_selection: true,
            ..MenuContext::default()
        };
        let _ = reduce(&mut state, MenuBarIntent::Open(MenuId::Edit));

        let effect = reduce(
            &mut state,
            MenuBarIntent::Select(item(MenuId::Edit, "Copy", &ctx)),
        );

        assert_eq!(
            effect,
            Some(MenuBarEffect::Activate(MenuAction::Edit(EditCommand::Copy)))
        );
    }
}
