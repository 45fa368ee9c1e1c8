//! Canonical compositions for the recognized combining marks.
// Generated from the Unicode canonical composition data. Do not edit by hand.

pub static COMPOSE: &[(u16, u16, u16)] = &[
    (0x0041, 0x0300, 0x00C0), (0x0041, 0x0301, 0x00C1), (0x0043, 0x0301, 0x0106), (0x0045, 0x0300, 0x00C8),
    (0x0045, 0x0301, 0x00C9), (0x0047, 0x0301, 0x01F4), (0x0049, 0x0300, 0x00CC), (0x0049, 0x0301, 0x00CD),
    (0x004B, 0x0301, 0x1E30), (0x004C, 0x0301, 0x0139), (0x004D, 0x0301, 0x1E3E), (0x004E, 0x0300, 0x01F8),
    (0x004E, 0x0301, 0x0143), (0x004F, 0x0300, 0x00D2), (0x004F, 0x0301, 0x00D3), (0x0050, 0x0301, 0x1E54),
    (0x0052, 0x0301, 0x0154), (0x0053, 0x0301, 0x015A), (0x0055, 0x0300, 0x00D9), (0x0055, 0x0301, 0x00DA),
    (0x0057, 0x0300, 0x1E80), (0x0057, 0x0301, 0x1E82), (0x0059, 0x0300, 0x1EF2), (0x0059, 0x0301, 0x00DD),
    (0x005A, 0x0301, 0x0179), (0x0061, 0x0300, 0x00E0), (0x0061, 0x0301, 0x00E1), (0x0063, 0x0301, 0x0107),
    (0x0065, 0x0300, 0x00E8), (0x0065, 0x0301, 0x00E9), (0x0067, 0x0301, 0x01F5), (0x0069, 0x0300, 0x00EC),
    (0x0069, 0x0301, 0x00ED), (0x006B, 0x0301, 0x1E31), (0x006C, 0x0301, 0x013A), (0x006D, 0x0301, 0x1E3F),
    (0x006E, 0x0300, 0x01F9), (0x006E, 0x0301, 0x0144), (0x006F, 0x0300, 0x00F2), (0x006F, 0x0301, 0x00F3),
    (0x0070, 0x0301, 0x1E55), (0x0072, 0x0301, 0x0155), (0x0073, 0x0301, 0x015B), (0x0075, 0x0300, 0x00F9),
    (0x0075, 0x0301, 0x00FA), (0x0077, 0x0300, 0x1E81), (0x0077, 0x0301, 0x1E83), (0x0079, 0x0300, 0x1EF3),
    (0x0079, 0x0301, 0x00FD), (0x007A, 0x0301, 0x017A), (0x00A8, 0x0300, 0x1FED), (0x00A8, 0x0301, 0x0385),
    (0x00C2, 0x0300, 0x1EA6), (0x00C2, 0x0301, 0x1EA4), (0x00C5, 0x0301, 0x01FA), (0x00C6, 0x0301, 0x01FC),
    (0x00C7, 0x0301, 0x1E08), (0x00CA, 0x0300, 0x1EC0), (0x00CA, 0x0301, 0x1EBE), (0x00CF, 0x0301, 0x1E2E),
    (0x00D4, 0x0300, 0x1ED2), (0x00D4, 0x0301, 0x1ED0), (0x00D5, 0x0301, 0x1E4C), (0x00D8, 0x0301, 0x01FE),
    (0x00DC, 0x0300, 0x01DB), (0x00DC, 0x0301, 0x01D7), (0x00E2, 0x0300, 0x1EA7), (0x00E2, 0x0301, 0x1EA5),
    (0x00E5, 0x0301, 0x01FB), (0x00E6, 0x0301, 0x01FD), (0x00E7, 0x0301, 0x1E09), (0x00EA, 0x0300, 0x1EC1),
    (0x00EA, 0x0301, 0x1EBF), (0x00EF, 0x0301, 0x1E2F), (0x00F4, 0x0300, 0x1ED3), (0x00F4, 0x0301, 0x1ED1),
    (0x00F5, 0x0301, 0x1E4D), (0x00F8, 0x0301, 0x01FF), (0x00FC, 0x0300, 0x01DC), (0x00FC, 0x0301, 0x01D8),
    (0x0102, 0x0300, 0x1EB0), (0x0102, 0x0301, 0x1EAE), (0x0103, 0x0300, 0x1EB1), (0x0103, 0x0301, 0x1EAF),
    (0x0112, 0x0300, 0x1E14), (0x0112, 0x0301, 0x1E16), (0x0113, 0x0300, 0x1E15), (0x0113, 0x0301, 0x1E17),
    (0x014C, 0x0300, 0x1E50), (0x014C, 0x0301, 0x1E52), (0x014D, 0x0300, 0x1E51), (0x014D, 0x0301, 0x1E53),
    (0x0168, 0x0301, 0x1E78), (0x0169, 0x0301, 0x1E79), (0x01A0, 0x0300, 0x1EDC), (0x01A0, 0x0301, 0x1EDA),
    (0x01A1, 0x0300, 0x1EDD), (0x01A1, 0x0301, 0x1EDB), (0x01AF, 0x0300, 0x1EEA), (0x01AF, 0x0301, 0x1EE8),
    (0x01B0, 0x0300, 0x1EEB), (0x01B0, 0x0301, 0x1EE9), (0x0391, 0x0300, 0x1FBA), (0x0391, 0x0301, 0x0386),
    (0x0395, 0x0300, 0x1FC8), (0x0395, 0x0301, 0x0388), (0x0397, 0x0300, 0x1FCA), (0x0397, 0x0301, 0x0389),
    (0x0399, 0x0300, 0x1FDA), (0x0399, 0x0301, 0x038A), (0x039F, 0x0300, 0x1FF8), (0x039F, 0x0301, 0x038C),
    (0x03A5, 0x0300, 0x1FEA), (0x03A5, 0x0301, 0x038E), (0x03A9, 0x0300, 0x1FFA), (0x03A9, 0x0301, 0x038F),
    (0x03B1, 0x0300, 0x1F70), (0x03B1, 0x0301, 0x03AC), (0x03B5, 0x0300, 0x1F72), (0x03B5, 0x0301, 0x03AD),
    (0x03B7, 0x0300, 0x1F74), (0x03B7, 0x0301, 0x03AE), (0x03B9, 0x0300, 0x1F76), (0x03B9, 0x0301, 0x03AF),
    (0x03BF, 0x0300, 0x1F78), (0x03BF, 0x0301, 0x03CC), (0x03C5, 0x0300, 0x1F7A), (0x03C5, 0x0301, 0x03CD),
    (0x03C9, 0x0300, 0x1F7C), (0x03C9, 0x0301, 0x03CE), (0x03CA, 0x0300, 0x1FD2), (0x03CA, 0x0301, 0x0390),
    (0x03CB, 0x0300, 0x1FE2), (0x03CB, 0x0301, 0x03B0), (0x03D2, 0x0301, 0x03D3), (0x0413, 0x0301, 0x0403),
    (0x0415, 0x0300, 0x0400), (0x0418, 0x0300, 0x040D), (0x041A, 0x0301, 0x040C), (0x0433, 0x0301, 0x0453),
    (0x0435, 0x0300, 0x0450), (0x0438, 0x0300, 0x045D), (0x043A, 0x0301, 0x045C), (0x1F00, 0x0300, 0x1F02),
    (0x1F00, 0x0301, 0x1F04), (0x1F01, 0x0300, 0x1F03), (0x1F01, 0x0301, 0x1F05), (0x1F08, 0x0300, 0x1F0A),
    (0x1F08, 0x0301, 0x1F0C), (0x1F09, 0x0300, 0x1F0B), (0x1F09, 0x0301, 0x1F0D), (0x1F10, 0x0300, 0x1F12),
    (0x1F10, 0x0301, 0x1F14), (0x1F11, 0x0300, 0x1F13), (0x1F11, 0x0301, 0x1F15), (0x1F18, 0x0300, 0x1F1A),
    (0x1F18, 0x0301, 0x1F1C), (0x1F19, 0x0300, 0x1F1B), (0x1F19, 0x0301, 0x1F1D), (0x1F20, 0x0300, 0x1F22),
    (0x1F20, 0x0301, 0x1F24), (0x1F21, 0x0300, 0x1F23), (0x1F21, 0x0301, 0x1F25), (0x1F28, 0x0300, 0x1F2A),
    (0x1F28, 0x0301, 0x1F2C), (0x1F29, 0x0300, 0x1F2B), (0x1F29, 0x0301, 0x1F2D), (0x1F30, 0x0300, 0x1F32),
    (0x1F30, 0x0301, 0x1F34), (0x1F31, 0x0300, 0x1F33), (0x1F31, 0x0301, 0x1F35), (0x1F38, 0x0300, 0x1F3A),
    (0x1F38, 0x0301, 0x1F3C), (0x1F39, 0x0300, 0x1F3B), (0x1F39, 0x0301, 0x1F3D), (0x1F40, 0x0300, 0x1F42),
    (0x1F40, 0x0301, 0x1F44), (0x1F41, 0x0300, 0x1F43), (0x1F41, 0x0301, 0x1F45), (0x1F48, 0x0300, 0x1F4A),
    (0x1F48, 0x0301, 0x1F4C), (0x1F49, 0x0300, 0x1F4B), (0x1F49, 0x0301, 0x1F4D), (0x1F50, 0x0300, 0x1F52),
    (0x1F50, 0x0301, 0x1F54), (0x1F51, 0x0300, 0x1F53), (0x1F51, 0x0301, 0x1F55), (0x1F59, 0x0300, 0x1F5B),
    (0x1F59, 0x0301, 0x1F5D), (0x1F60, 0x0300, 0x1F62), (0x1F60, 0x0301, 0x1F64), (0x1F61, 0x0300, 0x1F63),
    (0x1F61, 0x0301, 0x1F65), (0x1F68, 0x0300, 0x1F6A), (0x1F68, 0x0301, 0x1F6C), (0x1F69, 0x0300, 0x1F6B),
    (0x1F69, 0x0301, 0x1F6D), (0x1F80, 0x0300, 0x1F82), (0x1F80, 0x0301, 0x1F84), (0x1F81, 0x0300, 0x1F83),
    (0x1F81, 0x0301, 0x1F85), (0x1F88, 0x0300, 0x1F8A), (0x1F88, 0x0301, 0x1F8C), (0x1F89, 0x0300, 0x1F8B),
    (0x1F89, 0x0301, 0x1F8D), (0x1F90, 0x0300, 0x1F92), (0x1F90, 0x0301, 0x1F94), (0x1F91, 0x0300, 0x1F93),
    (0x1F91, 0x0301, 0x1F95), (0x1F98, 0x0300, 0x1F9A), (0x1F98, 0x0301, 0x1F9C), (0x1F99, 0x0300, 0x1F9B),
    (0x1F99, 0x0301, 0x1F9D), (0x1FA0, 0x0300, 0x1FA2), (0x1FA0, 0x0301, 0x1FA4), (0x1FA1, 0x0300, 0x1FA3),
    (0x1FA1, 0x0301, 0x1FA5), (0x1FA8, 0x0300, 0x1FAA), (0x1FA8, 0x0301, 0x1FAC), (0x1FA9, 0x0300, 0x1FAB),
    (0x1FA9, 0x0301, 0x1FAD), (0x1FB3, 0x0300, 0x1FB2), (0x1FB3, 0x0301, 0x1FB4), (0x1FBE, 0x0300, 0x1F76),
    (0x1FBE, 0x0301, 0x03AF), (0x1FBF, 0x0300, 0x1FCD), (0x1FBF, 0x0301, 0x1FCE), (0x1FC3, 0x0300, 0x1FC2),
    (0x1FC3, 0x0301, 0x1FC4), (0x1FF3, 0x0300, 0x1FF2), (0x1FF3, 0x0301, 0x1FF4), (0x1FFE, 0x0300, 0x1FDD),
    (0x1FFE, 0x0301, 0x1FDE), (0x2126, 0x0300, 0x1FFA), (0x2126, 0x0301, 0x038F), (0x212A, 0x0301, 0x1E30),
    (0x212B, 0x0301, 0x01FA), (0x3046, 0x3099, 0x3094), (0x304B, 0x3099, 0x304C), (0x304D, 0x3099, 0x304E),
    (0x304F, 0x3099, 0x3050), (0x3051, 0x3099, 0x3052), (0x3053, 0x3099, 0x3054), (0x3055, 0x3099, 0x3056),
    (0x3057, 0x3099, 0x3058), (0x3059, 0x3099, 0x305A), (0x305B, 0x3099, 0x305C), (0x305D, 0x3099, 0x305E),
    (0x305F, 0x3099, 0x3060), (0x3061, 0x3099, 0x3062), (0x3064, 0x3099, 0x3065), (0x3066, 0x3099, 0x3067),
    (0x3068, 0x3099, 0x3069), (0x306F, 0x3099, 0x3070), (0x306F, 0x309A, 0x3071), (0x3072, 0x3099, 0x3073),
    (0x3072, 0x309A, 0x3074), (0x3075, 0x3099, 0x3076), (0x3075, 0x309A, 0x3077), (0x3078, 0x3099, 0x3079),
    (0x3078, 0x309A, 0x307A), (0x307B, 0x3099, 0x307C), (0x307B, 0x309A, 0x307D), (0x309D, 0x3099, 0x309E),
    (0x30A6, 0x3099, 0x30F4), (0x30AB, 0x3099, 0x30AC), (0x30AD, 0x3099, 0x30AE), (0x30AF, 0x3099, 0x30B0),
    (0x30B1, 0x3099, 0x30B2), (0x30B3, 0x3099, 0x30B4), (0x30B5, 0x3099, 0x30B6), (0x30B7, 0x3099, 0x30B8),
    (0x30B9, 0x3099, 0x30BA), (0x30BB, 0x3099, 0x30BC), (0x30BD, 0x3099, 0x30BE), (0x30BF, 0x3099, 0x30C0),
    (0x30C1, 0x3099, 0x30C2), (0x30C4, 0x3099, 0x30C5), (0x30C6, 0x3099, 0x30C7), (0x30C8, 0x3099, 0x30C9),
    (0x30CF, 0x3099, 0x30D0), (0x30CF, 0x309A, 0x30D1), (0x30D2, 0x3099, 0x30D3), (0x30D2, 0x309A, 0x30D4),
    (0x30D5, 0x3099, 0x30D6), (0x30D5, 0x309A, 0x30D7), (0x30D8, 0x3099, 0x30D9), (0x30D8, 0x309A, 0x30DA),
    (0x30DB, 0x3099, 0x30DC), (0x30DB, 0x309A, 0x30DD), (0x30EF, 0x3099, 0x30F7), (0x30F0, 0x3099, 0x30F8),
    (0x30F1, 0x3099, 0x30F9), (0x30F2, 0x3099, 0x30FA), (0x30FD, 0x3099, 0x30FE),
];
