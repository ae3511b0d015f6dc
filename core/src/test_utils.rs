//! Helpers for writing small DICOM files and folder trees in tests

use crate::extraction::tags::{
    MODALITY, SEQUENCE_NAME, SERIES_DESCRIPTION, SOP_CLASS_UID, SOP_INSTANCE_UID,
};
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::tags::PIXEL_DATA;
use dicom_dictionary_std::uids::{EXPLICIT_VR_LITTLE_ENDIAN, MR_IMAGE_STORAGE};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use std::fs;
use std::path::{Path, PathBuf};

const SOP_INSTANCE: &str = "1.2.826.0.1.3680043.2.1125.1.1";

/// Writes an MR DICOM file with an optional SequenceName
pub fn write_dicom(path: &Path, sequence_name: Option<&str>) {
    write_dicom_with(path, sequence_name, None);
}

/// Writes an MR DICOM file with optional SequenceName and SeriesDescription
pub fn write_dicom_with(
    path: &Path,
    sequence_name: Option<&str>,
    series_description: Option<&str>,
) {
    let mut dcm = InMemDicomObject::from_element_iter([
        DataElement::new(SOP_CLASS_UID, VR::UI, PrimitiveValue::from(MR_IMAGE_STORAGE)),
        DataElement::new(SOP_INSTANCE_UID, VR::UI, PrimitiveValue::from(SOP_INSTANCE)),
        DataElement::new(MODALITY, VR::CS, PrimitiveValue::from("MR")),
    ]);
    if let Some(name) = sequence_name {
        dcm.put(DataElement::new(
            SEQUENCE_NAME,
            VR::SH,
            PrimitiveValue::from(name),
        ));
    }
    if let Some(desc) = series_description {
        dcm.put(DataElement::new(
            SERIES_DESCRIPTION,
            VR::LO,
            PrimitiveValue::from(desc),
        ));
    }
    // Parsing must stop before this
    dcm.put(DataElement::new(
        PIXEL_DATA,
        VR::OB,
        PrimitiveValue::from(vec![0u8; 64]),
    ));

    let file_obj = dcm
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(MR_IMAGE_STORAGE)
                .media_storage_sop_instance_uid(SOP_INSTANCE),
        )
        .unwrap();
    file_obj.write_to_file(path).unwrap();
}

/// Creates `root/patient/sequence` and returns the sequence folder
pub fn make_sequence_folder(root: &Path, patient: &str, sequence: &str) -> PathBuf {
    let dir = root.join(patient).join(sequence);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Sorted directory entry names, for comparing trees
pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
