use mongodb::bson::Bson;

use crate::utils::error::StoreError;

pub const DEFAULT_SERVICE_NAME: &str = "Blog API";

/// Name echoed back in every response envelope.
pub fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string())
}

/// Reads an integer produced by an aggregation stage. `$sum` yields Int32 or
/// Int64 depending on the magnitude of its inputs.
pub fn bson_to_i64(value: Option<&Bson>) -> Result<i64, StoreError> {
    match value {
        Some(Bson::Int32(v)) => Ok(i64::from(*v)),
        Some(Bson::Int64(v)) => Ok(*v),
        Some(Bson::Double(v)) => Ok(*v as i64),
        Some(other) => Err(StoreError::Shape(format!(
            "expected a number, found {:?}",
            other.element_type()
        ))),
        None => Err(StoreError::Shape("missing numeric field".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_every_numeric_width() {
        assert_eq!(bson_to_i64(Some(&Bson::Int32(3))).unwrap(), 3);
        assert_eq!(bson_to_i64(Some(&Bson::Int64(1 << 40))).unwrap(), 1 << 40);
        assert_eq!(bson_to_i64(Some(&Bson::Double(7.0))).unwrap(), 7);
    }

    #[test]
    fn rejects_missing_or_non_numeric() {
        assert!(bson_to_i64(None).is_err());
        assert!(bson_to_i64(Some(&Bson::String("7".into()))).is_err());
    }
}
