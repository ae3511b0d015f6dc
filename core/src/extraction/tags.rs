use crate::error::{Result, SeqnameError};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Naming Tags
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);

// Identification Tags
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

/// Reads a tag as a trimmed, non-empty string
///
/// # Errors
///
/// - [`SeqnameError::TagNotFound`] if the element is absent
/// - [`SeqnameError::InvalidValue`] if it is not a string or is blank
pub fn require_string_value(dcm: &InMemDicomObject, tag: Tag) -> Result<String> {
    let elem = dcm
        .element(tag)
        .map_err(|_| SeqnameError::TagNotFound(format!("{}", tag)))?;
    let value = elem.to_str()?.trim().to_string();
    if value.is_empty() {
        return Err(SeqnameError::InvalidValue(format!("{} is empty", tag)));
    }
    Ok(value)
}
