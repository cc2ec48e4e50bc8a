//! VEVENT UID rewriting over the icalendar parser's component tree.

use anyhow::Result;
use icalendar::parser::{Component, ParseString, Property, read_calendar, unfold};
use uuid::Uuid;

/// Result of rewriting one calendar document.
pub struct Rewrite {
    /// Re-serialized ICS content
    pub ics: String,
    /// Number of VEVENT components that received a fresh UID
    pub events: usize,
}

/// Parse ICS content, give every VEVENT a fresh `<uuid>@<domain>` UID, and
/// serialize the document back to ICS text.
///
/// Components of any other type (VTIMEZONE, VALARM, VTODO, ...) pass through
/// untouched, including their order, properties, and parameters.
pub fn rewrite_uids(content: &str, domain: &str) -> Result<Rewrite> {
    let unfolded = unfold(content);
    let mut calendar =
        read_calendar(&unfolded).map_err(|e| anyhow::anyhow!("ICS parse error: {}", e))?;

    let mut events = 0;
    for component in &mut calendar.components {
        events += rewrite_component(component, domain);
    }

    Ok(Rewrite {
        ics: calendar.to_string(),
        events,
    })
}

/// Rewrite one component and everything nested under it. Events can sit at
/// any depth next to other components, so the walk recurses unconditionally.
fn rewrite_component(component: &mut Component, domain: &str) -> usize {
    let mut events = 0;

    if component.name == "VEVENT" {
        set_uid(component, format!("{}@{}", Uuid::new_v4(), domain));
        events += 1;
    }

    for child in &mut component.components {
        events += rewrite_component(child, domain);
    }

    events
}

/// Overwrite the UID property in place, or append one if the event has none.
fn set_uid(component: &mut Component, uid: String) {
    let existing = component
        .properties
        .iter_mut()
        .find(|p| p.name.as_ref().eq_ignore_ascii_case("UID"));

    match existing {
        Some(prop) => prop.val = ParseString::from(uid),
        None => component.properties.push(Property {
            name: "UID".into(),
            val: ParseString::from(uid),
            params: Vec::new(),
        }),
    }
}
