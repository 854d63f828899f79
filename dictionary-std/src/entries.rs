//! The attribute entries of the standard data dictionary.

use crate::data_element::DictionaryEntry as E;
use crate::data_element::TagRange::*;
use dcmview_core::{Tag, VR};

/// The dictionary entries, ordered by tag.
///
/// Attributes whose standard VR is ambiguous (US or SS, OB or OW)
/// are declared with the unsigned or word form.
#[rustfmt::skip]
pub static ENTRIES: &[E] = &[
    E { tag: Single(Tag(0x0002, 0x0000)), alias: "FileMetaInformationGroupLength", vr: VR::UL },
    E { tag: Single(Tag(0x0002, 0x0001)), alias: "FileMetaInformationVersion", vr: VR::OB },
    E { tag: Single(Tag(0x0002, 0x0002)), alias: "MediaStorageSOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0003)), alias: "MediaStorageSOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0010)), alias: "TransferSyntaxUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0012)), alias: "ImplementationClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0013)), alias: "ImplementationVersionName", vr: VR::SH },
    E { tag: Single(Tag(0x0002, 0x0016)), alias: "SourceApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0017)), alias: "SendingApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0018)), alias: "ReceivingApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0100)), alias: "PrivateInformationCreatorUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0102)), alias: "PrivateInformation", vr: VR::OB },
    E { tag: Single(Tag(0x0008, 0x0005)), alias: "SpecificCharacterSet", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0008)), alias: "ImageType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0012)), alias: "InstanceCreationDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0013)), alias: "InstanceCreationTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0014)), alias: "InstanceCreatorUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0016)), alias: "SOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0018)), alias: "SOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0020)), alias: "StudyDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0021)), alias: "SeriesDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0022)), alias: "AcquisitionDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0023)), alias: "ContentDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x002A)), alias: "AcquisitionDateTime", vr: VR::DT },
    E { tag: Single(Tag(0x0008, 0x0030)), alias: "StudyTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0031)), alias: "SeriesTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0032)), alias: "AcquisitionTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0033)), alias: "ContentTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0050)), alias: "AccessionNumber", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0060)), alias: "Modality", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0064)), alias: "ConversionType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0068)), alias: "PresentationIntentType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0070)), alias: "Manufacturer", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x0080)), alias: "InstitutionName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x0081)), alias: "InstitutionAddress", vr: VR::ST },
    E { tag: Single(Tag(0x0008, 0x0090)), alias: "ReferringPhysicianName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x0100)), alias: "CodeValue", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0102)), alias: "CodingSchemeDesignator", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0104)), alias: "CodeMeaning", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1010)), alias: "StationName", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x1030)), alias: "StudyDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x103E)), alias: "SeriesDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1040)), alias: "InstitutionalDepartmentName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1050)), alias: "PerformingPhysicianName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1060)), alias: "NameOfPhysiciansReadingStudy", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1070)), alias: "OperatorsName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1090)), alias: "ManufacturerModelName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1110)), alias: "ReferencedStudySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1111)), alias: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1115)), alias: "ReferencedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1140)), alias: "ReferencedImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1150)), alias: "ReferencedSOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x1155)), alias: "ReferencedSOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x1160)), alias: "ReferencedFrameNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0008, 0x2111)), alias: "DerivationDescription", vr: VR::ST },
    E { tag: Single(Tag(0x0008, 0x2112)), alias: "SourceImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9007)), alias: "FrameType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x9092)), alias: "ReferencedImageEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9205)), alias: "PixelPresentation", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x9206)), alias: "VolumetricProperties", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x9207)), alias: "VolumeBasedCalculationTechnique", vr: VR::CS },
    E { tag: Single(Tag(0x0010, 0x0010)), alias: "PatientName", vr: VR::PN },
    E { tag: Single(Tag(0x0010, 0x0020)), alias: "PatientID", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x0030)), alias: "PatientBirthDate", vr: VR::DA },
    E { tag: Single(Tag(0x0010, 0x0032)), alias: "PatientBirthTime", vr: VR::TM },
    E { tag: Single(Tag(0x0010, 0x0040)), alias: "PatientSex", vr: VR::CS },
    E { tag: Single(Tag(0x0010, 0x1010)), alias: "PatientAge", vr: VR::AS },
    E { tag: Single(Tag(0x0010, 0x1020)), alias: "PatientSize", vr: VR::DS },
    E { tag: Single(Tag(0x0010, 0x1030)), alias: "PatientWeight", vr: VR::DS },
    E { tag: Single(Tag(0x0010, 0x2160)), alias: "EthnicGroup", vr: VR::SH },
    E { tag: Single(Tag(0x0010, 0x21B0)), alias: "AdditionalPatientHistory", vr: VR::LT },
    E { tag: Single(Tag(0x0010, 0x4000)), alias: "PatientComments", vr: VR::LT },
    E { tag: Single(Tag(0x0018, 0x0010)), alias: "ContrastBolusAgent", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x0015)), alias: "BodyPartExamined", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0020)), alias: "ScanningSequence", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0021)), alias: "SequenceVariant", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0022)), alias: "ScanOptions", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0023)), alias: "MRAcquisitionType", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0024)), alias: "SequenceName", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x0025)), alias: "AngioFlag", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0050)), alias: "SliceThickness", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0060)), alias: "KVP", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0080)), alias: "RepetitionTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0081)), alias: "EchoTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0082)), alias: "InversionTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0083)), alias: "NumberOfAverages", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0084)), alias: "ImagingFrequency", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0085)), alias: "ImagedNucleus", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x0086)), alias: "EchoNumbers", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x0087)), alias: "MagneticFieldStrength", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0088)), alias: "SpacingBetweenSlices", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0089)), alias: "NumberOfPhaseEncodingSteps", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x0090)), alias: "DataCollectionDiameter", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0091)), alias: "EchoTrainLength", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x0093)), alias: "PercentSampling", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0094)), alias: "PercentPhaseFieldOfView", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0095)), alias: "PixelBandwidth", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1000)), alias: "DeviceSerialNumber", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1020)), alias: "SoftwareVersions", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1030)), alias: "ProtocolName", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1041)), alias: "ContrastBolusVolume", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1060)), alias: "TriggerTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1063)), alias: "FrameTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1065)), alias: "FrameTimeVector", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1088)), alias: "HeartRate", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1100)), alias: "ReconstructionDiameter", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1110)), alias: "DistanceSourceToDetector", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1111)), alias: "DistanceSourceToPatient", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1120)), alias: "GantryDetectorTilt", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1130)), alias: "TableHeight", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1140)), alias: "RotationDirection", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x1150)), alias: "ExposureTime", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1151)), alias: "XRayTubeCurrent", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1152)), alias: "Exposure", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1160)), alias: "FilterType", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x1164)), alias: "ImagerPixelSpacing", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1170)), alias: "GeneratorPower", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1190)), alias: "FocalSpots", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1210)), alias: "ConvolutionKernel", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x1242)), alias: "ActualFrameDuration", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1250)), alias: "ReceiveCoilName", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x1251)), alias: "TransmitCoilName", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x1310)), alias: "AcquisitionMatrix", vr: VR::US },
    E { tag: Single(Tag(0x0018, 0x1312)), alias: "InPlanePhaseEncodingDirection", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x1314)), alias: "FlipAngle", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1316)), alias: "SAR", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1318)), alias: "dBdt", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x2005)), alias: "SliceLocationVector", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x5100)), alias: "PatientPosition", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x5101)), alias: "ViewPosition", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x6011)), alias: "SequenceOfUltrasoundRegions", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9004)), alias: "ContentQualification", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x9005)), alias: "PulseSequenceName", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x9073)), alias: "AcquisitionDuration", vr: VR::FD },
    E { tag: Single(Tag(0x0018, 0x9087)), alias: "DiffusionBValue", vr: VR::FD },
    E { tag: Single(Tag(0x0018, 0x9089)), alias: "DiffusionGradientOrientation", vr: VR::FD },
    E { tag: Single(Tag(0x0018, 0x9112)), alias: "MRTimingAndRelatedParametersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9114)), alias: "MREchoSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9117)), alias: "MRDiffusionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9151)), alias: "FrameReferenceDateTime", vr: VR::DT },
    E { tag: Single(Tag(0x0018, 0x9226)), alias: "MRImageFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x000D)), alias: "StudyInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x000E)), alias: "SeriesInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x0010)), alias: "StudyID", vr: VR::SH },
    E { tag: Single(Tag(0x0020, 0x0011)), alias: "SeriesNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0012)), alias: "AcquisitionNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0013)), alias: "InstanceNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0020)), alias: "PatientOrientation", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x0032)), alias: "ImagePositionPatient", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x0037)), alias: "ImageOrientationPatient", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x0052)), alias: "FrameOfReferenceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x0060)), alias: "Laterality", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x0100)), alias: "TemporalPositionIdentifier", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0105)), alias: "NumberOfTemporalPositions", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0110)), alias: "TemporalResolution", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x1002)), alias: "ImagesInAcquisition", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x1040)), alias: "PositionReferenceIndicator", vr: VR::LO },
    E { tag: Single(Tag(0x0020, 0x1041)), alias: "SliceLocation", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x4000)), alias: "ImageComments", vr: VR::LT },
    E { tag: Single(Tag(0x0020, 0x9056)), alias: "StackID", vr: VR::SH },
    E { tag: Single(Tag(0x0020, 0x9057)), alias: "InStackPositionNumber", vr: VR::UL },
    E { tag: Single(Tag(0x0020, 0x9111)), alias: "FrameContentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9113)), alias: "PlanePositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9116)), alias: "PlaneOrientationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9128)), alias: "TemporalPositionIndex", vr: VR::UL },
    E { tag: Single(Tag(0x0020, 0x9156)), alias: "FrameAcquisitionNumber", vr: VR::US },
    E { tag: Single(Tag(0x0020, 0x9157)), alias: "DimensionIndexValues", vr: VR::UL },
    E { tag: Single(Tag(0x0020, 0x9221)), alias: "DimensionOrganizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9222)), alias: "DimensionIndexSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9164)), alias: "DimensionOrganizationUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x9165)), alias: "DimensionIndexPointer", vr: VR::AT },
    E { tag: Single(Tag(0x0020, 0x9167)), alias: "FunctionalGroupPointer", vr: VR::AT },
    E { tag: Single(Tag(0x0028, 0x0002)), alias: "SamplesPerPixel", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0004)), alias: "PhotometricInterpretation", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x0006)), alias: "PlanarConfiguration", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0008)), alias: "NumberOfFrames", vr: VR::IS },
    E { tag: Single(Tag(0x0028, 0x0009)), alias: "FrameIncrementPointer", vr: VR::AT },
    E { tag: Single(Tag(0x0028, 0x0010)), alias: "Rows", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0011)), alias: "Columns", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0030)), alias: "PixelSpacing", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x0034)), alias: "PixelAspectRatio", vr: VR::IS },
    E { tag: Single(Tag(0x0028, 0x0051)), alias: "CorrectedImage", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x0100)), alias: "BitsAllocated", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0101)), alias: "BitsStored", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0102)), alias: "HighBit", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0103)), alias: "PixelRepresentation", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0106)), alias: "SmallestImagePixelValue", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0107)), alias: "LargestImagePixelValue", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0108)), alias: "SmallestPixelValueInSeries", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0109)), alias: "LargestPixelValueInSeries", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0120)), alias: "PixelPaddingValue", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0121)), alias: "PixelPaddingRangeLimit", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0300)), alias: "QualityControlImage", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x0301)), alias: "BurnedInAnnotation", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x0A02)), alias: "PixelSpacingCalibrationType", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1040)), alias: "PixelIntensityRelationship", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1041)), alias: "PixelIntensityRelationshipSign", vr: VR::SS },
    E { tag: Single(Tag(0x0028, 0x1050)), alias: "WindowCenter", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1051)), alias: "WindowWidth", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1052)), alias: "RescaleIntercept", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1053)), alias: "RescaleSlope", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1054)), alias: "RescaleType", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x1055)), alias: "WindowCenterWidthExplanation", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x1056)), alias: "VOILUTFunction", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1101)), alias: "RedPaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x1102)), alias: "GreenPaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x1103)), alias: "BluePaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x1199)), alias: "PaletteColorLookupTableUID", vr: VR::UI },
    E { tag: Single(Tag(0x0028, 0x1201)), alias: "RedPaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1202)), alias: "GreenPaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1203)), alias: "BluePaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1221)), alias: "SegmentedRedPaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1222)), alias: "SegmentedGreenPaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1223)), alias: "SegmentedBluePaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x2110)), alias: "LossyImageCompression", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x2112)), alias: "LossyImageCompressionRatio", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x2114)), alias: "LossyImageCompressionMethod", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x3000)), alias: "ModalityLUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x3002)), alias: "LUTDescriptor", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x3003)), alias: "LUTExplanation", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x3004)), alias: "ModalityLUTType", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x3006)), alias: "LUTData", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x3010)), alias: "VOILUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9001)), alias: "DataPointRows", vr: VR::UL },
    E { tag: Single(Tag(0x0028, 0x9002)), alias: "DataPointColumns", vr: VR::UL },
    E { tag: Single(Tag(0x0028, 0x9110)), alias: "PixelMeasuresSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9132)), alias: "FrameVOILUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9145)), alias: "PixelValueTransformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0032, 0x000A)), alias: "StudyStatusID", vr: VR::CS },
    E { tag: Single(Tag(0x0032, 0x1032)), alias: "RequestingPhysician", vr: VR::PN },
    E { tag: Single(Tag(0x0032, 0x1060)), alias: "RequestedProcedureDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0244)), alias: "PerformedProcedureStepStartDate", vr: VR::DA },
    E { tag: Single(Tag(0x0040, 0x0245)), alias: "PerformedProcedureStepStartTime", vr: VR::TM },
    E { tag: Single(Tag(0x0040, 0x0253)), alias: "PerformedProcedureStepID", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x0254)), alias: "PerformedProcedureStepDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0260)), alias: "PerformedProtocolCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0275)), alias: "RequestAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x9096)), alias: "RealWorldValueMappingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x9210)), alias: "LUTLabel", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x9211)), alias: "RealWorldValueLastValueMapped", vr: VR::US },
    E { tag: Single(Tag(0x0040, 0x9216)), alias: "RealWorldValueFirstValueMapped", vr: VR::US },
    E { tag: Single(Tag(0x0040, 0x9224)), alias: "RealWorldValueIntercept", vr: VR::FD },
    E { tag: Single(Tag(0x0040, 0x9225)), alias: "RealWorldValueSlope", vr: VR::FD },
    E { tag: Single(Tag(0x0054, 0x0011)), alias: "NumberOfEnergyWindows", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0012)), alias: "EnergyWindowInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0013)), alias: "EnergyWindowRangeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0016)), alias: "RadiopharmaceuticalInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0021)), alias: "NumberOfDetectors", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0022)), alias: "DetectorInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0053)), alias: "NumberOfFramesInRotation", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0070)), alias: "TimeSlotVector", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0080)), alias: "SliceVector", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0081)), alias: "NumberOfSlices", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0101)), alias: "NumberOfTimeSlices", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x1000)), alias: "SeriesType", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1001)), alias: "Units", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1002)), alias: "CountsSource", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1102)), alias: "DecayCorrection", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1300)), alias: "FrameReferenceTime", vr: VR::DS },
    E { tag: Single(Tag(0x0054, 0x1330)), alias: "ImageIndex", vr: VR::US },
    E { tag: Single(Tag(0x2050, 0x0020)), alias: "PresentationLUTShape", vr: VR::CS },
    E { tag: Single(Tag(0x5200, 0x9229)), alias: "SharedFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x5200, 0x9230)), alias: "PerFrameFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: Group100(Tag(0x6000, 0x0010)), alias: "OverlayRows", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0011)), alias: "OverlayColumns", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0015)), alias: "NumberOfFramesInOverlay", vr: VR::IS },
    E { tag: Group100(Tag(0x6000, 0x0022)), alias: "OverlayDescription", vr: VR::LO },
    E { tag: Group100(Tag(0x6000, 0x0040)), alias: "OverlayType", vr: VR::CS },
    E { tag: Group100(Tag(0x6000, 0x0045)), alias: "OverlaySubtype", vr: VR::LO },
    E { tag: Group100(Tag(0x6000, 0x0050)), alias: "OverlayOrigin", vr: VR::SS },
    E { tag: Group100(Tag(0x6000, 0x0051)), alias: "ImageFrameOrigin", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0100)), alias: "OverlayBitsAllocated", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0102)), alias: "OverlayBitPosition", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x1500)), alias: "OverlayLabel", vr: VR::LO },
    E { tag: Group100(Tag(0x6000, 0x3000)), alias: "OverlayData", vr: VR::OW },
    E { tag: Single(Tag(0x7FE0, 0x0001)), alias: "ExtendedOffsetTable", vr: VR::OV },
    E { tag: Single(Tag(0x7FE0, 0x0002)), alias: "ExtendedOffsetTableLengths", vr: VR::OV },
    E { tag: Single(Tag(0x7FE0, 0x0008)), alias: "FloatPixelData", vr: VR::OF },
    E { tag: Single(Tag(0x7FE0, 0x0009)), alias: "DoubleFloatPixelData", vr: VR::OD },
    E { tag: Single(Tag(0x7FE0, 0x0010)), alias: "PixelData", vr: VR::OW },
    E { tag: Single(Tag(0xFFFA, 0xFFFA)), alias: "DigitalSignaturesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0xFFFC, 0xFFFC)), alias: "DataSetTrailingPadding", vr: VR::OB },
    E { tag: Single(Tag(0xFFFE, 0xE000)), alias: "Item", vr: VR::UN },
    E { tag: Single(Tag(0xFFFE, 0xE00D)), alias: "ItemDelimitationItem", vr: VR::UN },
    E { tag: Single(Tag(0xFFFE, 0xE0DD)), alias: "SequenceDelimitationItem", vr: VR::UN },
];
