//! Screen routing
//!
//! [`route`] maps the selected screen and the theme flag to a description of
//! what the body shows. It allocates nothing and never fails; every screen is
//! handled by an explicit match arm.

use crate::state::ScreenId;
use crate::ui::interaction::ClickAction;

/// Label next to the dark mode switch on every screen
pub const TOGGLE_LABEL: &str = "Enable Dark Mode";

pub const SCREEN1_BODY: &str = "Geeks for geeks : Geeks learning from geeks ";
pub const SCREEN2_BODY: &str = "GFG : GeeksforGeeks was founded by Sandeep Jain";
pub const SCREEN3_BODY: &str =
    "Address: A-143, 9th Floor, Sovereign Corporate Tower Sector-136, Noida, Uttar Pradesh - 201305 ";

/// Actions wired into the shared header bar and toggle row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenActions {
    pub on_toggle: ClickAction,
    pub on_open_drawer: ClickAction,
}

impl Default for ScreenActions {
    fn default() -> Self {
        Self {
            on_toggle: ClickAction::ToggleTheme,
            on_open_drawer: ClickAction::OpenDrawer,
        }
    }
}

/// How text on the toggle row and body picks its color.
///
/// Screen 1 paints text with the on-surface role; screens 2 and 3 inherit
/// whatever the surrounding theme gives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTreatment {
    OnSurface,
    Inherited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBar {
    pub title: &'static str,
    pub on_menu: ClickAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRow {
    pub label: &'static str,
    pub checked: bool,
    pub on_toggle: ClickAction,
}

/// Everything a screen body is made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContent {
    pub header: HeaderBar,
    pub toggle: ToggleRow,
    pub body: &'static str,
    pub text: TextTreatment,
}

/// Build the content for `screen`.
pub fn route(screen: ScreenId, dark_mode: bool, actions: &ScreenActions) -> ScreenContent {
    let (body, text) = match screen {
        ScreenId::Screen1 => (SCREEN1_BODY, TextTreatment::OnSurface),
        ScreenId::Screen2 => (SCREEN2_BODY, TextTreatment::Inherited),
        ScreenId::Screen3 => (SCREEN3_BODY, TextTreatment::Inherited),
    };

    ScreenContent {
        header: HeaderBar {
            title: screen.title(),
            on_menu: actions.on_open_drawer.clone(),
        },
        toggle: ToggleRow {
            label: TOGGLE_LABEL,
            checked: dark_mode,
            on_toggle: actions.on_toggle.clone(),
        },
        body,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_screen1() {
        let content = route(ScreenId::Screen1, false, &ScreenActions::default());
        assert_eq!(content.header.title, "Screen 1");
        assert_eq!(content.body, SCREEN1_BODY);
        assert!(!content.toggle.checked);
        assert_eq!(content.text, TextTreatment::OnSurface);
    }

    #[test]
    fn test_route_titles_and_bodies() {
        let cases = [
            (ScreenId::Screen1, "Screen 1", SCREEN1_BODY, TextTreatment::OnSurface),
            (ScreenId::Screen2, "Screen 2", SCREEN2_BODY, TextTreatment::Inherited),
            (ScreenId::Screen3, "Screen 3", SCREEN3_BODY, TextTreatment::Inherited),
        ];
        for (screen, title, body, text) in cases {
            let content = route(screen, false, &ScreenActions::default());
            assert_eq!(content.header.title, title);
            assert_eq!(content.body, body);
            assert_eq!(content.text, text);
            assert_eq!(content.toggle.label, TOGGLE_LABEL);
        }
    }

    #[test]
    fn test_route_bodies_are_distinct() {
        let bodies: Vec<&str> = ScreenId::ALL
            .into_iter()
            .map(|screen| route(screen, false, &ScreenActions::default()).body)
            .collect();
        assert_eq!(bodies.len(), 3);
        assert_ne!(bodies[0], bodies[1]);
        assert_ne!(bodies[0], bodies[2]);
        assert_ne!(bodies[1], bodies[2]);
        assert!(bodies[2].starts_with("Address: A-143"));
    }

    #[test]
    fn test_route_binds_switch_to_dark_flag() {
        for screen in ScreenId::ALL {
            assert!(route(screen, true, &ScreenActions::default()).toggle.checked);
            assert!(!route(screen, false, &ScreenActions::default()).toggle.checked);
        }
    }

    #[test]
    fn test_route_passes_actions_through() {
        let actions = ScreenActions {
            on_toggle: ClickAction::DismissDrawer,
            on_open_drawer: ClickAction::SelectScreen(ScreenId::Screen2),
        };
        let content = route(ScreenId::Screen3, false, &actions);
        assert_eq!(content.toggle.on_toggle, ClickAction::DismissDrawer);
        assert_eq!(content.header.on_menu, ClickAction::SelectScreen(ScreenId::Screen2));
    }

    #[test]
    fn test_screens_two_and_three_inherit_text_color() {
        let actions = ScreenActions::default();
        assert_eq!(route(ScreenId::Screen2, true, &actions).text, TextTreatment::Inherited);
        assert_eq!(route(ScreenId::Screen3, true, &actions).text, TextTreatment::Inherited);
    }

    #[test]
    fn test_route_is_pure() {
        let actions = ScreenActions::default();
        assert_eq!(
            route(ScreenId::Screen2, true, &actions),
            route(ScreenId::Screen2, true, &actions)
        );
    }
}
