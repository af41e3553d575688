//! Column option token injection.
//!
//! MySQL column attributes (`UNSIGNED`, `AUTO_INCREMENT`, `COMMENT`, ...)
//! must appear at fixed positions relative to the standard clauses of an
//! already-rendered column definition. The definition text is scanned
//! once for marker clauses to compute three insertion slots, then each
//! option is spliced in at its slot in a fixed priority order, shifting
//! later slots as text grows.
//!
//! Slot semantics:
//! - slot 0: before nullability/default (`UNSIGNED`, `ZEROFILL`)
//! - slot 1: after nullability/default, before key/reference clauses
//!   (`AUTO_INCREMENT`)
//! - slot 2: after everything, including a `REFERENCES` clause
//!   (`COMMENT`, `COLUMN_FORMAT`, `STORAGE`, `AFTER`)

use alterix_core::fragment::OptionValue;
use alterix_core::platform::Platform;

/// Standard clauses anchoring the insertion slots. Matched
/// space-prefixed so partial words never anchor a slot.
const MARKERS: [&str; 6] = ["NOT NULL", "NULL", "DEFAULT", "UNIQUE", "PRIMARY", "REFERENCES"];

/// Options without a priority sort after all known ones and emit nothing.
const UNKNOWN_PRIORITY: u8 = 7;

/// Strips `-`, `_` and spaces and lowercases, for lookup only.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_lowercase()
}

/// Fixed priority order for injection. Lower splices first.
fn priority(normalized: &str) -> u8 {
    match normalized {
        "unsigned" => 0,
        "zerofill" => 1,
        "identity" | "serial" | "autoincrement" => 2,
        "comment" => 3,
        "columnformat" | "format" => 4,
        "storage" => 5,
        "after" => 6,
        _ => UNKNOWN_PRIORITY,
    }
}

/// Computes the three insertion offsets for a rendered column
/// definition. A slot with no anchoring marker falls back to the end of
/// the text.
fn insert_offsets(sql: &str) -> [usize; 3] {
    let mut slots: [Option<usize>; 3] = [None; 3];

    for marker in MARKERS {
        let needle = format!(" {marker}");
        let Some(position) = sql.find(&needle) else {
            continue;
        };
        // REFERENCES anchors all three slots, key clauses the first two,
        // nullability/default only the first.
        let depth = match marker {
            "REFERENCES" => 2,
            "UNIQUE" | "PRIMARY" => 1,
            _ => 0,
        };
        for slot in &mut slots[..=depth] {
            *slot = Some(slot.map_or(position, |existing| existing.min(position)));
        }
    }

    slots.map(|slot| slot.unwrap_or(sql.len()))
}

/// Maps a normalized option to its token text and target slot.
/// Unknown options, and `after` where it is not permitted, map to
/// nothing.
fn token(
    normalized: &str,
    value: &OptionValue,
    platform: &dyn Platform,
    allow_after: bool,
) -> Option<(String, usize)> {
    let text = value.as_text().unwrap_or("");
    match normalized {
        "unsigned" => Some((" UNSIGNED".to_string(), 0)),
        "zerofill" => Some((" ZEROFILL".to_string(), 0)),
        "identity" | "serial" | "autoincrement" => Some((" AUTO_INCREMENT".to_string(), 1)),
        "comment" => Some((format!(" COMMENT {}", platform.quote_value(text)), 2)),
        "columnformat" | "format" => Some((format!(" COLUMN_FORMAT {}", text.to_uppercase()), 2)),
        "storage" => Some((format!(" STORAGE {}", text.to_uppercase()), 2)),
        "after" if allow_after => {
            Some((format!(" AFTER {}", platform.quote_identifier(text)), 2))
        }
        _ => None,
    }
}

/// Splices a column's options into its rendered definition.
///
/// Options with falsy values and options MySQL does not know are skipped;
/// they stay in the model but emit no text. `allow_after` is true only
/// for add-column clauses: `CHANGE COLUMN` never emits `AFTER`.
pub(crate) fn inject_column_options(
    mut sql: String,
    options: &[(String, OptionValue)],
    platform: &dyn Platform,
    allow_after: bool,
) -> String {
    let mut offsets = insert_offsets(&sql);

    let mut ordered: Vec<&(String, OptionValue)> = options.iter().collect();
    ordered.sort_by_key(|(name, _)| priority(&normalize(name)));

    for (name, value) in ordered {
        if !value.is_set() {
            continue;
        }
        let Some((text, slot)) = token(&normalize(name), value, platform, allow_after) else {
            continue;
        };
        sql.insert_str(offsets[slot], &text);
        for offset in &mut offsets[slot..] {
            *offset += text.len();
        }
    }

    sql
}
