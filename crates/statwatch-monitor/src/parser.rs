//! Payload parsing: one line of comma-separated numbers into a [`Snapshot`].

use statwatch_core::constants::SNAPSHOT_FIELD_COUNT;
use statwatch_core::errors::ParseError;
use statwatch_core::models::Snapshot;

/// Parse a raw statistics payload.
///
/// Surrounding whitespace is ignored, both around the whole payload and
/// around each field. Exactly [`SNAPSHOT_FIELD_COUNT`] fields are required
/// and every one must parse as a floating-point number.
pub fn parse_snapshot(payload: &str) -> Result<Snapshot, ParseError> {
    let line = payload.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyPayload);
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != SNAPSHOT_FIELD_COUNT {
        return Err(ParseError::MalformedFrame {
            expected: SNAPSHOT_FIELD_COUNT,
            actual: fields.len(),
        });
    }

    let mut values = [0.0; SNAPSHOT_FIELD_COUNT];
    for (index, (slot, raw)) in values.iter_mut().zip(&fields).enumerate() {
        let field = raw.trim();
        if field.is_empty() {
            return Err(ParseError::MalformedField {
                index,
                reason: "empty field".to_string(),
            });
        }
        let value = field
            .parse::<f64>()
            .map_err(|e| ParseError::MalformedField {
                index,
                reason: format!("{e}: {field:?}"),
            })?;
        // Overflowing literals such as `1e400` parse as infinity; only an
        // explicit `inf`/`infinity` spelling may produce one.
        if value.is_infinite() && !is_infinity_literal(field) {
            return Err(ParseError::MalformedField {
                index,
                reason: format!("value out of range: {field:?}"),
            });
        }
        *slot = value;
    }

    Ok(Snapshot::from_values(values))
}

fn is_infinity_literal(field: &str) -> bool {
    let unsigned = field.strip_prefix(['+', '-']).unwrap_or(field);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
