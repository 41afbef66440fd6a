//! Fixture generators.
//!
//! Each generator turns a [`Config`] into IDL source for one declaration.

use crate::config::Config;
use crate::error::CorpusError;

/// `struct FloatArray<size> { array<float32>:<size> values; };`
///
/// # Errors
/// Fails if `size` is missing or not a positive integer.
pub fn float_array(config: &Config) -> Result<String, CorpusError> {
    let size = config.get_size("size")?;
    Ok(format!(
        "struct FloatArray{size} {{\n    array<float32>:{size} values;\n}};\n"
    ))
}

/// `struct ByteVector<size> { vector<uint8>:<size> bytes; };`
///
/// # Errors
/// Fails if `size` is missing or not a positive integer.
pub fn byte_vector(config: &Config) -> Result<String, CorpusError> {
    let size = config.get_size("size")?;
    Ok(format!(
        "struct ByteVector{size} {{\n    vector<uint8>:{size} bytes;\n}};\n"
    ))
}

/// A struct with `count` `uint8` fields named `field1`..`fieldN`.
///
/// # Errors
/// Fails if `count` is missing or not a positive integer.
pub fn struct_field(config: &Config) -> Result<String, CorpusError> {
    let count = config.get_size("count")?;
    let mut output = format!("struct StructField{count} {{\n");
    for i in 1..=count {
        output.push_str(&format!("    uint8 field{i};\n"));
    }
    output.push_str("};\n");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_array() {
        let out = float_array(&Config::new().with("size", 256)).expect("generate");
        assert_eq!(
            out,
            "struct FloatArray256 {\n    array<float32>:256 values;\n};\n"
        );
    }

    #[test]
    fn test_byte_vector() {
        let out = byte_vector(&Config::new().with("size", 16)).expect("generate");
        assert!(out.contains("vector<uint8>:16 bytes;"));
    }

    #[test]
    fn test_struct_field() {
        let out = struct_field(&Config::new().with("count", 3)).expect("generate");
        assert!(out.starts_with("struct StructField3 {"));
        assert_eq!(out.matches("uint8 field").count(), 3);
        assert!(out.contains("uint8 field3;"));
    }

    #[test]
    fn test_missing_option() {
        assert!(float_array(&Config::new()).is_err());
        assert!(struct_field(&Config::new().with("count", 0)).is_err());
    }
}
