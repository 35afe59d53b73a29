use nutype_enum::nutype_enum;

nutype_enum! {
    /// The `nal_unit_type` field of a NAL unit header, ISO/IEC 14496-10:2022 (Table 7-1).
    ///
    /// Only the low five bits of the header byte carry the type, so every value
    /// from 0 to 31 can appear. Values 24 to 31 are unspecified and left to the
    /// application, only 24 has a named constant.
    pub enum NALUnitType(u8) {
        /// Unspecified
        Unspecified1 = 0,
        /// Coded slice of a non-IDR picture
        NonIDRSliceLayerWithoutPartitioning = 1,
        /// Coded slice data partition A
        SliceDataPartitionALayer = 2,
        /// Coded slice data partition B
        SliceDataPartitionBLayer = 3,
        /// Coded slice data partition C
        SliceDataPartitionCLayer = 4,
        /// Coded slice of an IDR picture
        IDRSliceLayerWithoutPartitioning = 5,
        /// Supplemental enhancement information
        SEI = 6,
        /// Sequence parameter set
        SPS = 7,
        /// Picture parameter set
        PPS = 8,
        /// Access unit delimiter
        AccessUnitDelimiter = 9,
        /// End of sequence
        EndOfSeq = 10,
        /// End of stream
        EndOfStream = 11,
        /// Filler data
        FillerData = 12,
        /// Sequence parameter set extension
        SPSExtension = 13,
        /// Prefix NAL unit
        PrefixNalUnit = 14,
        /// Subset sequence parameter set
        SubsetSPS = 15,
        /// Depth parameter set
        DepthParameterSet = 16,
        /// Reserved
        Reserved1 = 17,
        /// Reserved
        Reserved2 = 18,
        /// Coded slice of an auxiliary coded picture without partitioning
        AuxCodedPictureSliceLayerWithoutPartitioning = 19,
        /// Coded slice extension
        SliceLayerExtension = 20,
        /// Coded slice extension for a depth view component
        SliceLayerExtension2 = 21,
        /// Reserved
        Reserved3 = 22,
        /// Reserved
        Reserved4 = 23,
        /// Unspecified
        Unspecified2 = 24
    }
}

impl NALUnitType {
    /// Extracts the type from the first byte of a NAL unit, the low five bits.
    pub const fn from_header_byte(byte: u8) -> Self {
        Self(byte & 0x1F)
    }

    /// Returns `true` for slices of an IDR picture.
    pub const fn is_idr(self) -> bool {
        self.0 == Self::IDRSliceLayerWithoutPartitioning.0
    }

    /// Returns `true` for the coded slice types (1 to 5).
    pub const fn is_vcl(self) -> bool {
        self.0 >= Self::NonIDRSliceLayerWithoutPartitioning.0 && self.0 <= Self::IDRSliceLayerWithoutPartitioning.0
    }

    /// Returns `true` for sequence and picture parameter sets.
    pub const fn is_parameter_set(self) -> bool {
        self.0 == Self::SPS.0 || self.0 == Self::PPS.0
    }
}
