//! Flat wire payload.
//!
//! The collection endpoint (a spreadsheet script) wants one flat JSON
//! object with Spanish camelCase keys and pre-rendered display strings,
//! so the projection flattens everything here rather than shipping the
//! structured state. A declining guest sends zero counts, no menu, and
//! the single "No asistirá" marker instead of day labels.

use rsvp_core::{MenuChoice, RsvpState, NOT_ATTENDING_LABEL};
use serde::{Deserialize, Serialize};

/// Exactly what goes over the wire, field names included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpPayload {
    /// Primary respondent's name, trimmed.
    pub nombre_completo: String,
    /// Contact detail, trimmed.
    pub email_telefono: String,
    /// Human-readable labels of the selected days, or the decline
    /// marker alone.
    pub eventos: Vec<String>,
    /// Adult head count. Zero when declining.
    pub adultos: u32,
    /// Child head count. Zero when declining.
    pub ninos: u32,
    /// The respondent's menu label; empty when unset or declining.
    pub menu_principal: String,
    /// One "Name (Menu)" line per companion, menu omitted when unset.
    pub acompanantes: Vec<String>,
    /// Child names, comma-joined.
    pub ninos_nombres: String,
    /// Dietary notes, trimmed.
    pub alergias: String,
}

impl RsvpPayload {
    /// Project the wizard state into the wire shape.
    #[must_use]
    pub fn project(state: &RsvpState) -> Self {
        let eventos = if state.not_attending {
            vec![NOT_ATTENDING_LABEL.to_string()]
        } else {
            state.attending.iter().map(|d| d.label().to_string()).collect()
        };

        let acompanantes = if state.not_attending {
            Vec::new()
        } else {
            state
                .companions
                .iter()
                .filter(|c| !c.name.trim().is_empty())
                .map(|c| match c.menu {
                    MenuChoice::Unset => c.name.trim().to_string(),
                    chosen => format!("{} ({})", c.name.trim(), chosen.label()),
                })
                .collect()
        };

        let ninos_nombres = if state.not_attending {
            String::new()
        } else {
            state
                .children
                .iter()
                .map(|c| c.name.trim())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        };

        RsvpPayload {
            nombre_completo: state.full_name.trim().to_string(),
            email_telefono: state.contact.trim().to_string(),
            eventos,
            adultos: if state.not_attending { 0 } else { state.adult_count },
            ninos: if state.not_attending { 0 } else { state.child_count },
            menu_principal: if state.not_attending {
                String::new()
            } else {
                state.main_menu.label().to_string()
            },
            acompanantes,
            ninos_nombres,
            alergias: state.dietary_notes.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rsvp_core::{apply, Action, Day};

    fn attending_party() -> RsvpState {
        let state = RsvpState::default();
        let state = apply(&state, Action::SetFullName(" Juan Perez ".to_string()));
        let state = apply(&state, Action::SetContact("juan@example.com".to_string()));
        let state = apply(&state, Action::AdjustAdults(1));
        let state = apply(&state, Action::AdjustChildren(1));
        let state = apply(&state, Action::SetMainMenu(MenuChoice::Meat));
        let state = apply(
            &state,
            Action::SetCompanionName {
                index: 0,
                name: "Marta Ruiz".to_string(),
            },
        );
        let state = apply(
            &state,
            Action::SetCompanionMenu {
                index: 0,
                menu: MenuChoice::Fish,
            },
        );
        apply(
            &state,
            Action::SetChildName {
                index: 0,
                name: "Vera".to_string(),
            },
        )
    }

    #[test]
    fn attending_projection_flattens_everything() {
        let payload = RsvpPayload::project(&attending_party());
        assert_eq!(payload.nombre_completo, "Juan Perez");
        assert_eq!(payload.email_telefono, "juan@example.com");
        assert_eq!(payload.eventos, vec!["1 Agosto (Boda)".to_string()]);
        assert_eq!(payload.adultos, 2);
        assert_eq!(payload.ninos, 1);
        assert_eq!(payload.menu_principal, "Carne");
        assert_eq!(payload.acompanantes, vec!["Marta Ruiz (Pescado)".to_string()]);
        assert_eq!(payload.ninos_nombres, "Vera");
    }

    #[test]
    fn companion_without_menu_is_just_the_name() {
        let state = RsvpState::default();
        let state = apply(&state, Action::AdjustAdults(1));
        let state = apply(
            &state,
            Action::SetCompanionName {
                index: 0,
                name: "Luis".to_string(),
            },
        );
        let payload = RsvpPayload::project(&state);
        assert_eq!(payload.acompanantes, vec!["Luis".to_string()]);
    }

    #[test]
    fn declining_zeroes_the_party() {
        let state = apply(&attending_party(), Action::ToggleNotAttending);
        let payload = RsvpPayload::project(&state);
        assert_eq!(payload.eventos, vec![NOT_ATTENDING_LABEL.to_string()]);
        assert_eq!(payload.adultos, 0);
        assert_eq!(payload.ninos, 0);
        assert_eq!(payload.menu_principal, "");
        assert!(payload.acompanantes.is_empty());
        assert_eq!(payload.ninos_nombres, "");
    }

    #[test]
    fn wire_keys_are_spanish_camel_case() {
        let json = serde_json::to_value(RsvpPayload::project(&attending_party())).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "nombreCompleto",
            "emailTelefono",
            "eventos",
            "adultos",
            "ninos",
            "menuPrincipal",
            "acompanantes",
            "ninosNombres",
            "alergias",
        ] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }
    }

    #[test]
    fn events_follow_calendar_order() {
        let state = RsvpState::default();
        let state = apply(&state, Action::ToggleDay(Day::Farewell));
        let state = apply(&state, Action::ToggleDay(Day::Welcome));
        let payload = RsvpPayload::project(&state);
        assert_eq!(
            payload.eventos,
            vec![
                "31 Julio (Bienvenida)".to_string(),
                "1 Agosto (Boda)".to_string(),
                "2 Agosto (Despedida)".to_string(),
            ]
        );
    }
}
