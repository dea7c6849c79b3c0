use log::kv::{self, Key, Source, Value, VisitSource};
use tintlog_formatter::FieldValue;

struct Collector(Vec<(String, FieldValue)>);

impl<'kvs> VisitSource<'kvs> for Collector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push((key.as_str().to_string(), convert_value(&value)));
        Ok(())
    }
}

// integer-coercible values keep their numeric identity (the command-result
// hook distinguishes Integer(0) from the text "0"), strings stay text,
// anything else is pre-rendered
fn convert_value(value: &Value) -> FieldValue {
    if let Some(i) = value.to_i64() {
        FieldValue::Integer(i)
    } else if let Some(s) = value.to_borrowed_str() {
        FieldValue::Text(s.to_string())
    } else {
        FieldValue::Other(value.to_string())
    }
}

/// collect a record's key-value pairs, preserving visit order
pub(crate) fn collect_fields(source: &dyn Source) -> Vec<(String, FieldValue)> {
    let mut collector = Collector(Vec::new());
    let _ = source.visit(&mut collector);
    collector.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let source = [
            ("f1", Value::from("v1")),
            ("count", Value::from(3i64)),
            ("flag", Value::from(true)),
        ];
        let fields = collect_fields(&&source[..]);
        assert_eq!(
            fields,
            vec![
                ("f1".to_string(), FieldValue::Text("v1".to_string())),
                ("count".to_string(), FieldValue::Integer(3)),
                ("flag".to_string(), FieldValue::Other("true".to_string())),
            ]
        );
    }

    #[test]
    fn test_integer_zero_stays_integer() {
        let source = [("COMMAND_RESULT", Value::from(0i64))];
        let fields = collect_fields(&&source[..]);
        assert_eq!(fields[0].1, FieldValue::Integer(0));
    }
}
