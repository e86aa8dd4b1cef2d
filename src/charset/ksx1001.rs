//! Membership test for the KS X 1001 precomposed Hangul syllable set.
//!
//! The curated full mode only includes the 2350 canonical precomposed
//! syllables, not the whole Hangul Syllables block. Those are exactly the
//! code points whose legacy EUC-KR/cp949 encoding has a lead byte in
//! `0xB0..=0xC8` and a trail byte in `0xA1..=0xFE`. The run table below was
//! generated once from that mapping, stored as (offset from U+AC00, run
//! length) pairs, so no legacy codec is consulted at run time.

const BLOCK_START: u32 = 0xAC00;
const BLOCK_END: u32 = 0xD7A3;

/// True for the 2350 KS X 1001 syllables, false for every other character.
pub fn contains(c: char) -> bool {
    let cp = c as u32;
    if !(BLOCK_START..=BLOCK_END).contains(&cp) {
        return false;
    }

    let offset = (cp - BLOCK_START) as u16;
    match RUNS.binary_search_by_key(&offset, |&(start, _)| start) {
        Ok(_) => true,
        Err(0) => false,
        Err(i) => {
            let (start, len) = RUNS[i - 1];
            offset - start < len
        }
    }
}

#[rustfmt::skip]
const RUNS: &[(u16, u16)] = &[
    (0x0000, 2), (0x0004, 1), (0x0007, 4), (0x0010, 8), (0x0019, 5), (0x0020, 1), (0x0024, 1), (0x002c, 2),
    (0x002f, 3), (0x0038, 2), (0x003c, 1), (0x0040, 1), (0x004b, 1), (0x004d, 1), (0x0054, 1), (0x0058, 1),
    (0x005c, 1), (0x0070, 2), (0x0074, 1), (0x0077, 2), (0x007a, 1), (0x0080, 2), (0x0083, 4), (0x0089, 4),
    (0x0090, 1), (0x0094, 1), (0x009c, 2), (0x009f, 3), (0x00a8, 3), (0x00ac, 1), (0x00af, 2), (0x00b8, 2),
    (0x00bb, 3), (0x00c1, 1), (0x00c4, 1), (0x00c8, 1), (0x00cc, 1), (0x00d5, 1), (0x00d7, 1), (0x00e0, 2),
    (0x00e4, 1), (0x00e7, 2), (0x00ea, 1), (0x00ec, 1), (0x00ef, 3), (0x00f3, 1), (0x00f5, 2), (0x00fc, 2),
    (0x0100, 1), (0x0104, 1), (0x0106, 1), (0x010c, 2), (0x010f, 1), (0x0111, 1), (0x0118, 1), (0x011c, 1),
    (0x0120, 1), (0x0129, 1), (0x012c, 2), (0x0134, 2), (0x0138, 1), (0x013c, 1), (0x0144, 2), (0x0147, 1),
    (0x0149, 1), (0x0150, 1), (0x0154, 1), (0x0158, 1), (0x0161, 1), (0x0163, 1), (0x016c, 2), (0x0170, 1),
    (0x0173, 4), (0x017b, 3), (0x017f, 1), (0x0181, 2), (0x0188, 2), (0x018c, 1), (0x0190, 1), (0x019c, 2),
    (0x01a4, 1), (0x01b7, 1), (0x01c0, 2), (0x01c4, 1), (0x01c8, 1), (0x01d0, 2), (0x01d3, 1), (0x01dc, 1),
    (0x01e0, 1), (0x01e4, 1), (0x01f8, 2), (0x01fc, 1), (0x01ff, 3), (0x0208, 2), (0x020b, 1), (0x020d, 1),
    (0x0214, 1), (0x0230, 2), (0x0234, 1), (0x0237, 2), (0x023a, 1), (0x0240, 2), (0x0243, 1), (0x0245, 2),
    (0x024a, 1), (0x024c, 3), (0x0250, 1), (0x0254, 1), (0x0256, 1), (0x025c, 2), (0x025f, 3), (0x0265, 1),
    (0x0268, 2), (0x026c, 1), (0x0270, 1), (0x0278, 2), (0x027b, 3), (0x0284, 2), (0x028c, 1), (0x02bc, 3),
    (0x02c0, 1), (0x02c4, 1), (0x02cc, 2), (0x02cf, 3), (0x02d8, 2), (0x02dc, 1), (0x02e8, 1), (0x02eb, 1),
    (0x02ed, 1), (0x02f4, 1), (0x02f8, 1), (0x02fc, 1), (0x0307, 2), (0x030d, 1), (0x0310, 1), (0x032c, 2),
    (0x0330, 1), (0x0332, 1), (0x0334, 1), (0x033c, 2), (0x033f, 1), (0x0341, 3), (0x0348, 2), (0x0350, 1),
    (0x035c, 2), (0x0364, 2), (0x0379, 1), (0x0380, 1), (0x0384, 1), (0x0388, 1), (0x0390, 2), (0x0395, 1),
    (0x039c, 1), (0x03b8, 2), (0x03bc, 1), (0x03c0, 1), (0x03c7, 3), (0x03cb, 1), (0x03cd, 2), (0x03d4, 1),
    (0x03dc, 1), (0x03e8, 2), (0x03f0, 2), (0x03f4, 1), (0x03f8, 1), (0x0400, 2), (0x0404, 1), (0x040c, 1),
    (0x0410, 1), (0x0414, 1), (0x041c, 2), (0x0428, 1), (0x0444, 2), (0x0448, 1), (0x044a, 1), (0x044c, 1),
    (0x044e, 1), (0x0453, 3), (0x0457, 1), (0x0459, 1), (0x045d, 1), (0x047c, 2), (0x0480, 1), (0x0484, 1),
    (0x048c, 2), (0x048f, 1), (0x0491, 1), (0x0498, 3), (0x049c, 1), (0x049f, 4), (0x04a8, 2), (0x04ab, 5),
    (0x04b1, 1), (0x04b3, 3), (0x04b8, 1), (0x04bc, 1), (0x04c4, 2), (0x04c7, 3), (0x04d0, 2), (0x04d4, 1),
    (0x04d8, 1), (0x04e0, 1), (0x04e5, 1), (0x0508, 2), (0x050b, 2), (0x0510, 1), (0x0512, 2), (0x0518, 2),
    (0x051b, 3), (0x0523, 3), (0x0528, 1), (0x052c, 1), (0x0534, 2), (0x0537, 3), (0x0540, 2), (0x0544, 1),
    (0x0548, 1), (0x0550, 2), (0x0554, 2), (0x0558, 1), (0x055c, 1), (0x0560, 1), (0x0578, 2), (0x057c, 1),
    (0x0580, 1), (0x0582, 1), (0x0588, 2), (0x058b, 1), (0x058d, 1), (0x0592, 3), (0x0598, 1), (0x059c, 1),
    (0x05a8, 1), (0x05cc, 1), (0x05d0, 1), (0x05d4, 1), (0x05dc, 2), (0x05df, 1), (0x05e8, 2), (0x05ec, 1),
    (0x05f0, 1), (0x05f9, 1), (0x05fb, 1), (0x05fd, 1), (0x0604, 2), (0x0608, 1), (0x060b, 2), (0x0614, 2),
    (0x0617, 1), (0x0619, 1), (0x0620, 1), (0x0634, 1), (0x063c, 1), (0x0658, 1), (0x065c, 1), (0x0660, 1),
    (0x0668, 2), (0x0674, 2), (0x067c, 1), (0x0684, 2), (0x0689, 1), (0x0690, 2), (0x0694, 1), (0x0698, 3),
    (0x06a0, 2), (0x06a3, 1), (0x06a5, 2), (0x06aa, 1), (0x06ac, 1), (0x06b0, 1), (0x06b4, 1), (0x06c8, 2),
    (0x06cc, 1), (0x06d0, 1), (0x06d2, 1), (0x06d8, 2), (0x06db, 1), (0x06dd, 1), (0x06e2, 1), (0x06e4, 3),
    (0x06e8, 1), (0x06eb, 5), (0x06f3, 3), (0x06f7, 5), (0x06ff, 3), (0x0704, 1), (0x0708, 1), (0x0710, 2),
    (0x0713, 3), (0x071c, 1), (0x0754, 3), (0x0758, 1), (0x075b, 2), (0x075e, 2), (0x0764, 2), (0x0767, 1),
    (0x0769, 1), (0x076b, 1), (0x076e, 1), (0x0770, 2), (0x0774, 1), (0x0778, 1), (0x0780, 2), (0x0783, 3),
    (0x078c, 1), (0x0790, 1), (0x0794, 1), (0x07a0, 2), (0x07a8, 1), (0x07ac, 1), (0x07c4, 2), (0x07c8, 1),
    (0x07cb, 2), (0x07ce, 1), (0x07d0, 1), (0x07d4, 2), (0x07d7, 1), (0x07d9, 1), (0x07db, 1), (0x07dd, 1),
    (0x07e0, 1), (0x07e4, 1), (0x07e8, 1), (0x07fc, 1), (0x0810, 1), (0x0818, 1), (0x081c, 1), (0x0820, 1),
    (0x0828, 2), (0x082b, 1), (0x0834, 1), (0x0850, 2), (0x0854, 1), (0x0858, 1), (0x0860, 2), (0x0863, 1),
    (0x0865, 1), (0x086c, 1), (0x0880, 1), (0x0888, 1), (0x089d, 1), (0x08a4, 1), (0x08a8, 1), (0x08ac, 1),
    (0x08b5, 1), (0x08b7, 1), (0x08b9, 1), (0x08c0, 1), (0x08c4, 1), (0x08c8, 1), (0x08d0, 1), (0x08d5, 1),
    (0x08dc, 2), (0x08e0, 1), (0x08e3, 2), (0x08e6, 1), (0x08ec, 2), (0x08ef, 1), (0x08f1, 1), (0x08f8, 1),
    (0x0914, 2), (0x0918, 1), (0x091b, 2), (0x0924, 2), (0x0927, 4), (0x0930, 2), (0x0934, 1), (0x0938, 1),
    (0x0940, 2), (0x0943, 3), (0x094b, 3), (0x0950, 1), (0x0954, 1), (0x095c, 2), (0x095f, 3), (0x09a0, 2),
    (0x09a4, 1), (0x09a8, 1), (0x09aa, 2), (0x09b0, 2), (0x09b3, 3), (0x09bb, 3), (0x09c0, 1), (0x09c4, 1),
    (0x09cc, 2), (0x09cf, 3), (0x09d8, 1), (0x09ec, 1), (0x0a10, 2), (0x0a14, 1), (0x0a18, 1), (0x0a25, 1),
    (0x0a2c, 1), (0x0a34, 1), (0x0a48, 1), (0x0a64, 1), (0x0a68, 1), (0x0a9c, 2), (0x0aa0, 1), (0x0aa4, 1),
    (0x0aab, 2), (0x0ab1, 1), (0x0ad4, 1), (0x0af0, 1), (0x0af4, 1), (0x0af8, 1), (0x0b00, 2), (0x0b05, 1),
    (0x0b28, 2), (0x0b2c, 1), (0x0b2f, 2), (0x0b38, 2), (0x0b3b, 1), (0x0b44, 1), (0x0b48, 1), (0x0b4c, 1),
    (0x0b54, 2), (0x0b60, 1), (0x0b64, 1), (0x0b68, 1), (0x0b70, 2), (0x0b73, 1), (0x0b75, 1), (0x0b7c, 2),
    (0x0b80, 1), (0x0b84, 1), (0x0b8c, 2), (0x0b8f, 4), (0x0b96, 4), (0x0b9c, 1), (0x0ba0, 1), (0x0ba8, 2),
    (0x0bab, 3), (0x0bb4, 2), (0x0bb8, 1), (0x0bc7, 1), (0x0bc9, 1), (0x0bec, 2), (0x0bf0, 1), (0x0bf4, 1),
    (0x0bfc, 2), (0x0bff, 3), (0x0c07, 3), (0x0c0c, 1), (0x0c10, 1), (0x0c18, 2), (0x0c1b, 1), (0x0c1d, 1),
    (0x0c24, 2), (0x0c28, 1), (0x0c2c, 1), (0x0c34, 2), (0x0c37, 3), (0x0c40, 1), (0x0c44, 1), (0x0c51, 1),
    (0x0c53, 1), (0x0c5c, 2), (0x0c60, 1), (0x0c64, 1), (0x0c6c, 2), (0x0c6f, 1), (0x0c71, 1), (0x0c78, 1),
    (0x0c7c, 1), (0x0c8d, 1), (0x0ca8, 1), (0x0cb0, 1), (0x0cb4, 1), (0x0cb8, 1), (0x0cc0, 2), (0x0cc3, 1),
    (0x0cc5, 1), (0x0ccc, 1), (0x0cd0, 1), (0x0cd4, 1), (0x0cdd, 1), (0x0cdf, 1), (0x0ce1, 1), (0x0ce8, 2),
    (0x0cec, 1), (0x0cf0, 1), (0x0cf8, 2), (0x0cfb, 1), (0x0cfd, 1), (0x0d04, 1), (0x0d18, 1), (0x0d20, 1),
    (0x0d3c, 2), (0x0d40, 1), (0x0d44, 1), (0x0d4c, 1), (0x0d4f, 1), (0x0d51, 1), (0x0d58, 2), (0x0d5c, 1),
    (0x0d60, 1), (0x0d68, 2), (0x0d6b, 1), (0x0d6d, 1), (0x0d74, 2), (0x0d78, 1), (0x0d7c, 1), (0x0d84, 2),
    (0x0d87, 1), (0x0d89, 2), (0x0d8d, 2), (0x0dac, 2), (0x0db0, 1), (0x0db4, 1), (0x0dbc, 2), (0x0dbf, 1),
    (0x0dc1, 1), (0x0dc8, 2), (0x0dcc, 1), (0x0dce, 5), (0x0dd8, 2), (0x0ddb, 1), (0x0ddd, 2), (0x0de1, 1),
    (0x0de3, 3), (0x0de8, 1), (0x0dec, 1), (0x0df4, 2), (0x0df7, 4), (0x0e00, 2), (0x0e08, 1), (0x0e15, 1),
    (0x0e38, 2), (0x0e3c, 1), (0x0e40, 1), (0x0e42, 1), (0x0e48, 2), (0x0e4b, 1), (0x0e4d, 2), (0x0e53, 3),
    (0x0e58, 1), (0x0e5c, 1), (0x0e64, 2), (0x0e67, 3), (0x0e70, 2), (0x0e74, 1), (0x0e78, 1), (0x0e83, 3),
    (0x0e87, 1), (0x0e8c, 1), (0x0ea8, 2), (0x0eab, 2), (0x0eb0, 1), (0x0eb2, 1), (0x0eb8, 2), (0x0ebb, 1),
    (0x0ebd, 1), (0x0ec4, 1), (0x0ec8, 1), (0x0ed8, 2), (0x0efc, 1), (0x0f00, 1), (0x0f04, 1), (0x0f0d, 1),
    (0x0f0f, 1), (0x0f11, 1), (0x0f18, 1), (0x0f1c, 1), (0x0f20, 1), (0x0f29, 1), (0x0f2b, 1), (0x0f34, 3),
    (0x0f38, 1), (0x0f3b, 4), (0x0f44, 2), (0x0f47, 1), (0x0f49, 1), (0x0f4d, 1), (0x0f4f, 2), (0x0f54, 1),
    (0x0f58, 1), (0x0f61, 1), (0x0f63, 1), (0x0f6c, 1), (0x0f88, 1), (0x0f8c, 1), (0x0f90, 1), (0x0fa4, 1),
    (0x0fa8, 1), (0x0fac, 1), (0x0fb4, 1), (0x0fb7, 1), (0x0fc0, 1), (0x0fc4, 1), (0x0fc8, 1), (0x0fd0, 1),
    (0x0fd3, 1), (0x0ff8, 2), (0x0ffc, 1), (0x0fff, 2), (0x1002, 1), (0x1008, 2), (0x100b, 3), (0x100f, 1),
    (0x1011, 1), (0x1014, 5), (0x101b, 5), (0x1024, 2), (0x1027, 1), (0x1029, 1), (0x102d, 1), (0x1030, 2),
    (0x1034, 1), (0x1038, 1), (0x1040, 2), (0x1043, 3), (0x1049, 1), (0x104c, 2), (0x1050, 1), (0x105d, 1),
    (0x1084, 2), (0x1088, 1), (0x108b, 2), (0x108e, 1), (0x1094, 2), (0x1097, 1), (0x1099, 2), (0x10a0, 2),
    (0x10a4, 1), (0x10a7, 2), (0x10b0, 2), (0x10b3, 3), (0x10bc, 2), (0x10c0, 1), (0x10c4, 1), (0x10cd, 1),
    (0x10cf, 3), (0x10d5, 1), (0x10d8, 1), (0x10dc, 1), (0x10f4, 3), (0x10f8, 1), (0x10fc, 1), (0x1104, 2),
    (0x1107, 1), (0x1109, 1), (0x1110, 1), (0x1114, 1), (0x1124, 1), (0x112c, 1), (0x1140, 1), (0x1148, 2),
    (0x114c, 1), (0x1150, 1), (0x1158, 2), (0x1164, 1), (0x1168, 1), (0x1180, 2), (0x1184, 1), (0x1187, 4),
    (0x1190, 2), (0x1193, 1), (0x1195, 1), (0x1199, 2), (0x119c, 1), (0x11a4, 1), (0x11b0, 1), (0x11b8, 1),
    (0x11d4, 2), (0x11d8, 1), (0x11dc, 1), (0x11e9, 1), (0x11f0, 1), (0x11f4, 1), (0x11f8, 1), (0x1200, 1),
    (0x1203, 1), (0x1205, 1), (0x120c, 2), (0x1210, 1), (0x1214, 1), (0x121c, 2), (0x121f, 1), (0x1244, 2),
    (0x1248, 1), (0x124c, 1), (0x124e, 1), (0x1254, 2), (0x1257, 1), (0x1259, 3), (0x1260, 2), (0x1264, 1),
    (0x1268, 1), (0x126a, 1), (0x1270, 2), (0x1273, 3), (0x127b, 3), (0x1280, 1), (0x1284, 1), (0x128c, 2),
    (0x128f, 3), (0x1298, 2), (0x12a8, 1), (0x12d0, 2), (0x12d4, 1), (0x12d7, 2), (0x12e0, 1), (0x12e3, 3),
    (0x12ec, 1), (0x1301, 1), (0x1308, 2), (0x1318, 2), (0x131b, 3), (0x1340, 2), (0x1344, 1), (0x1348, 1),
    (0x1350, 2), (0x1355, 1), (0x1394, 1), (0x13b0, 1), (0x13c5, 1), (0x13cc, 2), (0x13d0, 1), (0x13d4, 1),
    (0x13dc, 1), (0x13df, 1), (0x13e1, 1), (0x143c, 1), (0x1451, 1), (0x1458, 1), (0x145c, 1), (0x1460, 1),
    (0x1468, 2), (0x1490, 2), (0x1494, 1), (0x1498, 1), (0x14a0, 2), (0x14a3, 1), (0x14a5, 1), (0x14ac, 2),
    (0x14af, 2), (0x14b3, 4), (0x14bc, 2), (0x14bf, 3), (0x14c5, 1), (0x14c8, 2), (0x14cc, 1), (0x14d0, 1),
    (0x14d8, 2), (0x14db, 3), (0x14e4, 2), (0x14e8, 1), (0x14ec, 1), (0x14f4, 2), (0x14f7, 1), (0x14f9, 1),
    (0x1500, 1), (0x1504, 1), (0x1508, 1), (0x1510, 1), (0x1515, 1), (0x151c, 5), (0x1523, 2), (0x1526, 2),
    (0x152c, 2), (0x152f, 3), (0x1536, 1), (0x1538, 2), (0x153c, 1), (0x1540, 1), (0x1548, 2), (0x154b, 3),
    (0x1554, 2), (0x1558, 1), (0x155c, 1), (0x1564, 2), (0x1567, 3), (0x1570, 1), (0x1574, 1), (0x1578, 1),
    (0x1585, 1), (0x158c, 3), (0x1590, 1), (0x1594, 1), (0x1596, 1), (0x159c, 2), (0x159f, 1), (0x15a1, 1),
    (0x15a5, 1), (0x15a8, 2), (0x15ac, 1), (0x15b0, 1), (0x15bd, 1), (0x15c4, 1), (0x15c8, 1), (0x15cc, 1),
    (0x15d4, 1), (0x15d7, 2), (0x15e0, 1), (0x15e4, 1), (0x15e8, 1), (0x15f0, 2), (0x15f3, 1), (0x15fc, 2),
    (0x1600, 1), (0x1604, 1), (0x160c, 2), (0x160f, 1), (0x1611, 1), (0x1618, 2), (0x161c, 1), (0x161f, 2),
    (0x1628, 2), (0x162b, 1), (0x162d, 1), (0x162f, 1), (0x1631, 2), (0x1634, 1), (0x1648, 1), (0x1650, 2),
    (0x1654, 1), (0x1658, 1), (0x1660, 1), (0x1665, 1), (0x166c, 2), (0x1670, 1), (0x1674, 1), (0x167c, 2),
    (0x167f, 1), (0x1681, 1), (0x1688, 2), (0x1690, 1), (0x1698, 1), (0x169b, 1), (0x169d, 1), (0x16a4, 2),
    (0x16a8, 1), (0x16ac, 2), (0x16b4, 2), (0x16b7, 1), (0x16b9, 1), (0x16dc, 2), (0x16e0, 1), (0x16e3, 2),
    (0x16eb, 3), (0x16ef, 1), (0x16f1, 1), (0x16f6, 1), (0x16f8, 2), (0x16fb, 2), (0x1700, 1), (0x1708, 2),
    (0x170c, 2), (0x1713, 3), (0x1718, 1), (0x171c, 1), (0x1724, 2), (0x1728, 2), (0x1745, 1), (0x1768, 2),
    (0x176c, 1), (0x1770, 1), (0x1772, 1), (0x1778, 2), (0x177c, 2), (0x1784, 1), (0x1788, 1), (0x178c, 1),
    (0x17c0, 1), (0x17d8, 2), (0x17dc, 1), (0x17df, 2), (0x17e2, 1), (0x17e8, 2), (0x17ed, 1), (0x17f4, 2),
    (0x17f8, 1), (0x1808, 1), (0x1810, 1), (0x1824, 1), (0x182c, 1), (0x1830, 1), (0x1834, 1), (0x183c, 2),
    (0x1848, 1), (0x1864, 2), (0x1868, 1), (0x186c, 1), (0x1874, 2), (0x1879, 1), (0x1880, 1), (0x1894, 1),
    (0x189c, 1), (0x18b8, 1), (0x18bc, 1), (0x18e9, 1), (0x18f0, 2), (0x18f4, 1), (0x18f8, 1), (0x18fa, 1),
    (0x18ff, 3), (0x190c, 1), (0x1910, 1), (0x1914, 1), (0x191c, 1), (0x1928, 2), (0x192c, 1), (0x1930, 1),
    (0x1938, 2), (0x193b, 1), (0x193d, 1), (0x1944, 2), (0x1948, 3), (0x194c, 3), (0x1953, 3), (0x1957, 3),
    (0x195d, 2), (0x1960, 2), (0x1964, 1), (0x1968, 1), (0x1970, 2), (0x1973, 3), (0x197c, 2), (0x1980, 1),
    (0x1984, 1), (0x1987, 1), (0x198c, 2), (0x198f, 1), (0x1991, 1), (0x1995, 1), (0x1997, 2), (0x199c, 1),
    (0x19a0, 1), (0x19a9, 1), (0x19b4, 2), (0x19b8, 2), (0x19bb, 4), (0x19c4, 7), (0x19cc, 1), (0x19ce, 1),
    (0x19d0, 2), (0x19d4, 1), (0x19d8, 1), (0x19e0, 2), (0x19e3, 1), (0x19e5, 1), (0x19ec, 3), (0x19f0, 1),
    (0x19f4, 1), (0x19f6, 2), (0x19fc, 6), (0x1a05, 4), (0x1a0c, 1), (0x1a10, 1), (0x1a18, 2), (0x1a1b, 2),
    (0x1a24, 2), (0x1a28, 1), (0x1a2c, 3), (0x1a30, 1), (0x1a33, 3), (0x1a37, 1), (0x1a39, 1), (0x1a3b, 1),
    (0x1a40, 2), (0x1a44, 1), (0x1a48, 1), (0x1a50, 2), (0x1a53, 3), (0x1a5c, 2), (0x1a60, 1), (0x1a6c, 1),
    (0x1a6f, 1), (0x1a71, 1), (0x1a78, 2), (0x1a7c, 1), (0x1a80, 1), (0x1a88, 2), (0x1a8b, 1), (0x1a8d, 1),
    (0x1a94, 2), (0x1a98, 1), (0x1a9c, 1), (0x1aa4, 2), (0x1aa7, 1), (0x1aa9, 1), (0x1ab0, 2), (0x1ab4, 1),
    (0x1ab8, 3), (0x1ac0, 2), (0x1ac3, 1), (0x1ac5, 1), (0x1acc, 2), (0x1ad0, 1), (0x1ad4, 1), (0x1adc, 2),
    (0x1ae0, 2), (0x1ae8, 2), (0x1aec, 1), (0x1af0, 1), (0x1af8, 2), (0x1afd, 1), (0x1b04, 2), (0x1b08, 1),
    (0x1b0c, 1), (0x1b14, 2), (0x1b17, 1), (0x1b19, 1), (0x1b20, 2), (0x1b24, 1), (0x1b28, 1), (0x1b30, 2),
    (0x1b33, 1), (0x1b35, 1), (0x1b37, 1), (0x1b3c, 2), (0x1b40, 1), (0x1b44, 1), (0x1b4a, 1), (0x1b4c, 2),
    (0x1b4f, 1), (0x1b51, 8), (0x1b5c, 1), (0x1b60, 1), (0x1b68, 1), (0x1b6b, 1), (0x1b74, 2), (0x1b78, 1),
    (0x1b7c, 3), (0x1b83, 3), (0x1b87, 4), (0x1b8e, 1), (0x1b90, 2), (0x1b94, 1), (0x1b96, 3), (0x1b9a, 1),
    (0x1ba0, 2), (0x1ba3, 4), (0x1bac, 2), (0x1bb0, 1), (0x1bb4, 1), (0x1bbc, 2), (0x1bbf, 3), (0x1bc8, 2),
    (0x1bcc, 1), (0x1bce, 1), (0x1bd0, 1), (0x1bd8, 1), (0x1bdd, 1), (0x1be4, 1), (0x1be8, 1), (0x1bec, 1),
    (0x1c00, 2), (0x1c04, 1), (0x1c08, 1), (0x1c0a, 1), (0x1c10, 2), (0x1c13, 1), (0x1c15, 2), (0x1c1c, 2),
    (0x1c20, 1), (0x1c24, 1), (0x1c2c, 2), (0x1c2f, 1), (0x1c31, 1), (0x1c38, 1), (0x1c3c, 1), (0x1c40, 1),
    (0x1c48, 2), (0x1c4c, 2), (0x1c54, 1), (0x1c70, 2), (0x1c74, 1), (0x1c78, 1), (0x1c7a, 1), (0x1c80, 2),
    (0x1c83, 1), (0x1c85, 3), (0x1c8b, 3), (0x1c94, 1), (0x1c9d, 1), (0x1c9f, 1), (0x1ca1, 1), (0x1ca8, 1),
    (0x1cbc, 2), (0x1cc4, 1), (0x1cc8, 1), (0x1ccc, 1), (0x1cd4, 2), (0x1cd7, 1), (0x1cd9, 1), (0x1ce0, 2),
    (0x1ce4, 1), (0x1cf5, 1), (0x1cfc, 2), (0x1d00, 1), (0x1d04, 3), (0x1d0c, 2), (0x1d0f, 1), (0x1d11, 1),
    (0x1d18, 1), (0x1d2c, 1), (0x1d34, 1), (0x1d50, 2), (0x1d54, 1), (0x1d58, 1), (0x1d60, 2), (0x1d63, 1),
    (0x1d6c, 1), (0x1d70, 1), (0x1d74, 1), (0x1d7c, 1), (0x1d88, 2), (0x1d8c, 1), (0x1d90, 1), (0x1d98, 2),
    (0x1d9b, 1), (0x1d9d, 1), (0x1dc0, 2), (0x1dc4, 1), (0x1dc7, 2), (0x1dca, 1), (0x1dd0, 2), (0x1dd3, 1),
    (0x1dd5, 2), (0x1dd9, 2), (0x1ddc, 2), (0x1de0, 1), (0x1de2, 1), (0x1de4, 1), (0x1de7, 1), (0x1dec, 2),
    (0x1def, 3), (0x1df8, 2), (0x1dfc, 1), (0x1e00, 1), (0x1e08, 2), (0x1e0b, 3), (0x1e14, 1), (0x1e18, 1),
    (0x1e29, 1), (0x1e4c, 2), (0x1e50, 1), (0x1e54, 1), (0x1e5c, 2), (0x1e5f, 3), (0x1e68, 1), (0x1e7d, 1),
    (0x1e84, 1), (0x1e98, 1), (0x1ebc, 2), (0x1ec0, 1), (0x1ec4, 1), (0x1ecc, 2), (0x1ecf, 1), (0x1ed1, 1),
    (0x1ed3, 1), (0x1ed8, 2), (0x1ee0, 1), (0x1eec, 1), (0x1ef4, 1), (0x1f08, 1), (0x1f10, 1), (0x1f14, 1),
    (0x1f18, 1), (0x1f20, 2), (0x1f41, 1), (0x1f48, 2), (0x1f4c, 1), (0x1f50, 1), (0x1f58, 2), (0x1f5d, 1),
    (0x1f64, 1), (0x1f78, 2), (0x1f9c, 1), (0x1fb8, 1), (0x1fd4, 1), (0x1fe4, 1), (0x1fe7, 1), (0x1fe9, 1),
    (0x200c, 2), (0x2010, 1), (0x2014, 1), (0x201c, 2), (0x2021, 2), (0x2027, 3), (0x202c, 1), (0x202e, 1),
    (0x2030, 1), (0x2038, 2), (0x203b, 4), (0x2044, 2), (0x2048, 1), (0x204c, 1), (0x2054, 2), (0x2057, 3),
    (0x2060, 1), (0x2064, 1), (0x2066, 1), (0x2068, 1), (0x2070, 1), (0x2075, 1), (0x2098, 2), (0x209c, 1),
    (0x20a0, 1), (0x20a8, 2), (0x20ab, 3), (0x20b4, 2), (0x20b8, 1), (0x20bc, 1), (0x20c4, 2), (0x20c7, 1),
    (0x20c9, 1), (0x20d0, 1), (0x20d4, 1), (0x20e4, 1), (0x20ec, 1), (0x20f0, 1), (0x2101, 1), (0x2108, 2),
    (0x210c, 1), (0x2110, 1), (0x2118, 2), (0x211b, 1), (0x211d, 1), (0x2124, 1), (0x2128, 1), (0x212c, 1),
    (0x2139, 1), (0x215c, 1), (0x2160, 1), (0x2164, 1), (0x216c, 2), (0x216f, 1), (0x2171, 1), (0x2178, 1),
    (0x2188, 1), (0x2194, 2), (0x2198, 1), (0x219c, 1), (0x21a4, 2), (0x21a7, 1), (0x21a9, 1), (0x21b0, 1),
    (0x21c4, 1), (0x21cc, 1), (0x21d0, 1), (0x21e8, 1), (0x21ec, 1), (0x21f0, 1), (0x21f8, 2), (0x21fb, 1),
    (0x21fd, 1), (0x2204, 1), (0x2208, 1), (0x220c, 1), (0x2214, 1), (0x2219, 1), (0x2220, 2), (0x2224, 1),
    (0x2228, 1), (0x2230, 2), (0x2233, 1), (0x2235, 1), (0x2258, 2), (0x225c, 1), (0x225f, 3), (0x2268, 2),
    (0x226b, 1), (0x226d, 1), (0x2274, 2), (0x2278, 1), (0x227c, 1), (0x2284, 2), (0x2287, 1), (0x2289, 1),
    (0x2290, 2), (0x2294, 1), (0x2298, 1), (0x22a0, 2), (0x22a3, 3), (0x22ac, 2), (0x22c1, 1), (0x22e4, 2),
    (0x22e8, 1), (0x22eb, 2), (0x22f4, 2), (0x22f7, 3), (0x2300, 2), (0x2304, 1), (0x2308, 1), (0x2310, 2),
    (0x2313, 1), (0x2315, 1), (0x231c, 1), (0x2320, 1), (0x2324, 1), (0x232c, 2), (0x232f, 3), (0x2338, 1),
    (0x2354, 2), (0x2358, 1), (0x235c, 1), (0x2364, 2), (0x2367, 1), (0x2369, 1), (0x2370, 2), (0x2374, 1),
    (0x2378, 1), (0x2380, 1), (0x2385, 1), (0x238c, 1), (0x23a1, 1), (0x23a8, 1), (0x23b0, 1), (0x23c4, 1),
    (0x23e0, 2), (0x23e4, 1), (0x23e8, 1), (0x23f0, 2), (0x23f3, 1), (0x23f5, 1), (0x23fc, 1), (0x2400, 1),
    (0x2404, 1), (0x2411, 1), (0x2418, 1), (0x242d, 1), (0x2434, 2), (0x2438, 1), (0x243c, 1), (0x2444, 2),
    (0x2447, 1), (0x2449, 1), (0x2450, 1), (0x2454, 1), (0x2458, 1), (0x2460, 1), (0x246c, 2), (0x2470, 1),
    (0x2474, 1), (0x247c, 2), (0x2481, 1), (0x24a4, 2), (0x24a8, 1), (0x24ac, 1), (0x24b4, 2), (0x24b7, 1),
    (0x24b9, 1), (0x24c0, 2), (0x24c4, 1), (0x24c8, 2), (0x24d0, 2), (0x24d3, 3), (0x24dc, 2), (0x24e0, 1),
    (0x24e4, 1), (0x24ec, 2), (0x24ef, 3), (0x24f8, 1), (0x250d, 1), (0x2530, 2), (0x2534, 1), (0x2538, 1),
    (0x253a, 1), (0x2540, 2), (0x2543, 3), (0x254c, 2), (0x2550, 1), (0x2554, 1), (0x255c, 2), (0x255f, 1),
    (0x2561, 1), (0x2568, 1), (0x256c, 1), (0x257c, 1), (0x2584, 1), (0x2588, 1), (0x25a0, 2), (0x25a4, 1),
    (0x25a8, 1), (0x25b0, 2), (0x25b3, 1), (0x25b5, 1), (0x25ba, 1), (0x25bc, 1), (0x25c0, 1), (0x25d8, 1),
    (0x25f4, 1), (0x25f8, 1), (0x2607, 1), (0x2609, 1), (0x2610, 1), (0x262c, 2), (0x2630, 1), (0x2634, 1),
    (0x263c, 2), (0x263f, 1), (0x2641, 1), (0x2648, 1), (0x265c, 1), (0x2664, 1), (0x2680, 2), (0x2684, 1),
    (0x2688, 1), (0x2690, 2), (0x2695, 1), (0x269c, 1), (0x26a0, 1), (0x26a4, 1), (0x26ac, 1), (0x26b1, 1),
    (0x26b8, 2), (0x26bc, 1), (0x26bf, 2), (0x26c2, 1), (0x26c8, 2), (0x26cb, 1), (0x26d4, 1), (0x26d8, 1),
    (0x26dc, 1), (0x26e4, 2), (0x26f0, 2), (0x26f4, 1), (0x26f8, 1), (0x2700, 2), (0x2703, 1), (0x2705, 1),
    (0x270c, 3), (0x2710, 1), (0x2714, 1), (0x2716, 1), (0x271c, 2), (0x271f, 3), (0x2725, 1), (0x2728, 2),
    (0x272c, 1), (0x2730, 1), (0x2738, 2), (0x273b, 3), (0x2744, 2), (0x277c, 2), (0x2780, 1), (0x2784, 1),
    (0x278c, 2), (0x278f, 3), (0x2798, 2), (0x279c, 1), (0x27a0, 1), (0x27a8, 2), (0x27ab, 1), (0x27ad, 1),
    (0x27b4, 1), (0x27b8, 1), (0x27bc, 1), (0x27c4, 2), (0x27c8, 2), (0x27d0, 1), (0x27d8, 1), (0x27e1, 1),
    (0x27e3, 1), (0x27ec, 2), (0x27f0, 1), (0x27f4, 1), (0x27fc, 2), (0x27ff, 1), (0x2801, 1), (0x2808, 1),
    (0x281d, 1), (0x2840, 1), (0x2844, 1), (0x285c, 1), (0x2860, 1), (0x2864, 1), (0x286d, 1), (0x286f, 1),
    (0x2878, 2), (0x287c, 1), (0x287f, 2), (0x2882, 1), (0x2888, 2), (0x288b, 1), (0x288d, 1), (0x2894, 1),
    (0x28a9, 1), (0x28cc, 1), (0x28d0, 1), (0x28d4, 1), (0x28dc, 1), (0x28df, 1), (0x28e8, 1), (0x28ec, 1),
    (0x28f0, 1), (0x28f8, 1), (0x28fb, 1), (0x28fd, 1), (0x2904, 1), (0x2908, 1), (0x290c, 1), (0x2914, 2),
    (0x2917, 1), (0x293c, 2), (0x2940, 1), (0x2944, 1), (0x294c, 2), (0x294f, 1), (0x2951, 1), (0x2958, 2),
    (0x295c, 1), (0x2960, 1), (0x2965, 1), (0x2968, 2), (0x296b, 1), (0x296d, 1), (0x2974, 2), (0x2978, 1),
    (0x297c, 1), (0x2984, 2), (0x2987, 3), (0x2990, 1), (0x29a5, 1), (0x29c8, 2), (0x29cc, 1), (0x29d0, 1),
    (0x29d2, 1), (0x29d8, 2), (0x29db, 1), (0x29dd, 1), (0x29e4, 2), (0x29e8, 1), (0x29ec, 1), (0x29f4, 2),
    (0x29f7, 1), (0x29f9, 1), (0x2a00, 2), (0x2a04, 1), (0x2a08, 1), (0x2a10, 2), (0x2a13, 3), (0x2a1c, 1),
    (0x2a20, 1), (0x2a24, 1), (0x2a2d, 1), (0x2a38, 2), (0x2a3c, 1), (0x2a40, 1), (0x2a45, 1), (0x2a48, 2),
    (0x2a4b, 1), (0x2a4d, 1), (0x2a51, 1), (0x2a54, 2), (0x2a58, 1), (0x2a5c, 1), (0x2a67, 1), (0x2a69, 1),
    (0x2a70, 2), (0x2a74, 1), (0x2a83, 1), (0x2a85, 1), (0x2a8c, 2), (0x2a90, 1), (0x2a94, 1), (0x2a9d, 1),
    (0x2a9f, 1), (0x2aa1, 1), (0x2aa8, 1), (0x2aac, 1), (0x2ab0, 1), (0x2ab9, 1), (0x2abb, 1), (0x2ac4, 2),
    (0x2ac8, 1), (0x2acc, 1), (0x2ad1, 1), (0x2ad4, 1), (0x2ad7, 1), (0x2ad9, 1), (0x2ae0, 1), (0x2ae4, 1),
    (0x2ae8, 1), (0x2af0, 1), (0x2af5, 1), (0x2afc, 2), (0x2b00, 1), (0x2b04, 1), (0x2b11, 1), (0x2b18, 2),
    (0x2b1c, 1), (0x2b20, 1), (0x2b28, 2), (0x2b2b, 1), (0x2b2d, 1), (0x2b34, 2), (0x2b38, 1), (0x2b3c, 1),
    (0x2b44, 1), (0x2b47, 1), (0x2b49, 1), (0x2b50, 2), (0x2b54, 1), (0x2b56, 4), (0x2b60, 2), (0x2b63, 1),
    (0x2b65, 1), (0x2b69, 1), (0x2b6c, 1), (0x2b70, 1), (0x2b74, 1), (0x2b7c, 2), (0x2b81, 1), (0x2b88, 2),
    (0x2b8c, 1), (0x2b90, 1), (0x2b98, 2), (0x2b9b, 1), (0x2b9d, 1),
];

#[cfg(test)]
mod tests {
    use super::{contains, RUNS};

    #[test_case('가' => true; "first syllable")]
    #[test_case('각' => true; "second syllable")]
    #[test_case('갂' => false; "rare syllable excluded")]
    #[test_case('나' => true; "na")]
    #[test_case('까' => true; "tense consonant")]
    #[test_case('한' => true; "han")]
    #[test_case('힣' => false; "last of the unicode block excluded")]
    #[test_case('A' => false; "ascii")]
    #[test_case('→' => false; "symbol")]
    fn membership(c: char) -> bool {
        contains(c)
    }

    #[test]
    fn run_table_shape() {
        // KS X 1001 defines exactly 2350 syllables.
        let total: u32 = RUNS.iter().map(|&(_, len)| len as u32).sum();
        assert_eq!(total, 2350);

        // Runs are sorted and disjoint, which binary search relies on.
        assert!(RUNS
            .windows(2)
            .all(|w| w[0].0 + w[0].1 <= w[1].0));
    }
}
