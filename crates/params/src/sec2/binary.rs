//! SEC 2 recommended curves over binary fields GF(2^m)
//!
//! `field` is the reduction polynomial with bit i set for the term x^i.

use crate::{CurveParams, FieldType};

/// sect113r1
pub const SECT113R1: CurveParams = CurveParams {
    name: "sect113r1",
    field_type: FieldType::Binary,
    field: "020000000000000000000000000201",
    a: "003088250CA6E7C7FE649CE85820F7",
    b: "00E8BEE4D3E2260744188BE0E9C723",
    gx: "009D73616F35F4AB1407D73562C10F",
    gy: "00A52830277958EE84D1315ED31886",
    order: "0100000000000000D9CCEC8A39E56F",
    cofactor: 2,
    security_level: 56,
};

/// sect113r2
pub const SECT113R2: CurveParams = CurveParams {
    name: "sect113r2",
    field_type: FieldType::Binary,
    field: "020000000000000000000000000201",
    a: "00689918DBEC7E5A0DD6DFC0AA55C7",
    b: "0095E9A9EC9B297BD4BF36E059184F",
    gx: "01A57A6A7B26CA5EF52FCDB8164797",
    gy: "00B3ADC94ED1FE674C06E695BABA1D",
    order: "010000000000000108789B2496AF93",
    cofactor: 2,
    security_level: 56,
};

/// sect131r1
pub const SECT131R1: CurveParams = CurveParams {
    name: "sect131r1",
    field_type: FieldType::Binary,
    field: "080000000000000000000000000000010D",
    a: "07A11B09A76B562144418FF3FF8C2570B8",
    b: "0217C05610884B63B9C6C7291678F9D341",
    gx: "0081BAF91FDF9833C40F9C181343638399",
    gy: "078C6E7EA38C001F73C8134B1B4EF9E150",
    order: "0400000000000000023123953A9464B54D",
    cofactor: 2,
    security_level: 64,
};

/// sect131r2
pub const SECT131R2: CurveParams = CurveParams {
    name: "sect131r2",
    field_type: FieldType::Binary,
    field: "080000000000000000000000000000010D",
    a: "03E5A88919D7CAFCBF415F07C2176573B2",
    b: "04B8266A46C55657AC734CE38F018F2192",
    gx: "0356DCD8F2F95031AD652D23951BB366A8",
    gy: "0648F06D867940A5366D9E265DE9EB240F",
    order: "0400000000000000016954A233049BA98F",
    cofactor: 2,
    security_level: 64,
};

/// sect163k1 (NIST K-163)
pub const SECT163K1: CurveParams = CurveParams {
    name: "sect163k1",
    field_type: FieldType::Binary,
    field: "0800000000000000000000000000000000000000C9",
    a: "000000000000000000000000000000000000000001",
    b: "000000000000000000000000000000000000000001",
    gx: "02FE13C0537BBC11ACAA07D793DE4E6D5E5C94EEE8",
    gy: "0289070FB05D38FF58321F2E800536D538CCDAA3D9",
    order: "04000000000000000000020108A2E0CC0D99F8A5EF",
    cofactor: 2,
    security_level: 80,
};

/// sect163r1
pub const SECT163R1: CurveParams = CurveParams {
    name: "sect163r1",
    field_type: FieldType::Binary,
    field: "0800000000000000000000000000000000000000C9",
    a: "07B6882CAAEFA84F9554FF8428BD88E246D2782AE2",
    b: "0713612DCDDCB40AAB946BDA29CA91F73AF958AFD9",
    gx: "0369979697AB43897789566789567F787A7876A654",
    gy: "00435EDB42EFAFB2989D51FEFCE3C80988F41FF883",
    order: "03FFFFFFFFFFFFFFFFFFFF48AAB689C29CA710279B",
    cofactor: 2,
    security_level: 80,
};

/// sect163r2 (NIST B-163)
pub const SECT163R2: CurveParams = CurveParams {
    name: "sect163r2",
    field_type: FieldType::Binary,
    field: "0800000000000000000000000000000000000000C9",
    a: "000000000000000000000000000000000000000001",
    b: "020A601907B8C953CA1481EB10512F78744A3205FD",
    gx: "03F0EBA16286A2D57EA0991168D4994637E8343E36",
    gy: "00D51FBC6C71A0094FA2CDD545B11C5C0C797324F1",
    order: "040000000000000000000292FE77E70C12A4234C33",
    cofactor: 2,
    security_level: 80,
};

/// sect193r1
pub const SECT193R1: CurveParams = CurveParams {
    name: "sect193r1",
    field_type: FieldType::Binary,
    field: "02000000000000000000000000000000000000000000008001",
    a: "0017858FEB7A98975169E171F77B4087DE098AC8A911DF7B01",
    b: "00FDFB49BFE6C3A89FACADAA7A1E5BBC7CC1C2E5D831478814",
    gx: "01F481BC5F0FF84A74AD6CDF6FDEF4BF6179625372D8C0C5E1",
    gy: "0025E399F2903712CCF3EA9E3A1AD17FB0B3201B6AF7CE1B05",
    order: "01000000000000000000000000C7F34A778F443ACC920EBA49",
    cofactor: 2,
    security_level: 96,
};

/// sect193r2
pub const SECT193R2: CurveParams = CurveParams {
    name: "sect193r2",
    field_type: FieldType::Binary,
    field: "02000000000000000000000000000000000000000000008001",
    a: "0163F35A5137C2CE3EA6ED8667190B0BC43ECD69977702709B",
    b: "00C9BB9E8927D4D64C377E2AB2856A5B16E3EFB7F61D4316AE",
    gx: "00D9B67D192E0367C803F39E1A7E82CA14A651350AAE617E8F",
    gy: "01CE94335607C304AC29E7DEFBD9CA01F596F927224CDECF6C",
    order: "010000000000000000000000015AAB561B005413CCD4EE99D5",
    cofactor: 2,
    security_level: 96,
};

/// sect233k1 (NIST K-233)
pub const SECT233K1: CurveParams = CurveParams {
    name: "sect233k1",
    field_type: FieldType::Binary,
    field: "020000000000000000000000000000000000000004000000000000000001",
    a: "000000000000000000000000000000000000000000000000000000000000",
    b: "000000000000000000000000000000000000000000000000000000000001",
    gx: "017232BA853A7E731AF129F22FF4149563A419C26BF50A4C9D6EEFAD6126",
    gy: "01DB537DECE819B7F70F555A67C427A8CD9BF18AEB9B56E0C11056FAE6A3",
    order: "008000000000000000000000000000069D5BB915BCD46EFB1AD5F173ABDF",
    cofactor: 4,
    security_level: 112,
};

/// sect233r1 (NIST B-233)
pub const SECT233R1: CurveParams = CurveParams {
    name: "sect233r1",
    field_type: FieldType::Binary,
    field: "020000000000000000000000000000000000000004000000000000000001",
    a: "000000000000000000000000000000000000000000000000000000000001",
    b: "0066647EDE6C332C7F8C0923BB58213B333B20E9CE4281FE115F7D8F90AD",
    gx: "00FAC9DFCBAC8313BB2139F1BB755FEF65BC391F8B36F8F8EB7371FD558B",
    gy: "01006A08A41903350678E58528BEBF8A0BEFF867A7CA36716F7E01F81052",
    order: "01000000000000000000000000000013E974E72F8A6922031D2603CFE0D7",
    cofactor: 2,
    security_level: 112,
};

/// sect239k1
pub const SECT239K1: CurveParams = CurveParams {
    name: "sect239k1",
    field_type: FieldType::Binary,
    field: "800000000000000000004000000000000000000000000000000000000001",
    a: "000000000000000000000000000000000000000000000000000000000000",
    b: "000000000000000000000000000000000000000000000000000000000001",
    gx: "29A0B6A887A983E9730988A68727A8B2D126C44CC2CC7B2A6555193035DC",
    gy: "76310804F12E549BDB011C103089E73510ACB275FC312A5DC6B76553F0CA",
    order: "2000000000000000000000000000005A79FEC67CB6E91F1C1DA800E478A5",
    cofactor: 4,
    security_level: 112,
};

/// sect283k1 (NIST K-283)
pub const SECT283K1: CurveParams = CurveParams {
    name: "sect283k1",
    field_type: FieldType::Binary,
    field: "0800000000000000000000000000000000000000000000000000000000000000000010A1",
    a: "000000000000000000000000000000000000000000000000000000000000000000000000",
    b: "000000000000000000000000000000000000000000000000000000000000000000000001",
    gx: "0503213F78CA44883F1A3B8162F188E553CD265F23C1567A16876913B0C2AC2458492836",
    gy: "01CCDA380F1C9E318D90F95D07E5426FE87E45C0E8184698E45962364E34116177DD2259",
    order: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE9AE2ED07577265DFF7F94451E061E163C61",
    cofactor: 4,
    security_level: 128,
};

/// sect283r1 (NIST B-283)
pub const SECT283R1: CurveParams = CurveParams {
    name: "sect283r1",
    field_type: FieldType::Binary,
    field: "0800000000000000000000000000000000000000000000000000000000000000000010A1",
    a: "000000000000000000000000000000000000000000000000000000000000000000000001",
    b: "027B680AC8B8596DA5A4AF8A19A0303FCA97FD7645309FA2A581485AF6263E313B79A2F5",
    gx: "05F939258DB7DD90E1934F8C70B0DFEC2EED25B8557EAC9C80E2E198F8CDBECD86B12053",
    gy: "03676854FE24141CB98FE6D4B20D02B4516FF702350EDDB0826779C813F0DF45BE8112F4",
    order: "03FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEF90399660FC938A90165B042A7CEFADB307",
    cofactor: 2,
    security_level: 128,
};

/// sect409k1 (NIST K-409)
pub const SECT409K1: CurveParams = CurveParams {
    name: "sect409k1",
    field_type: FieldType::Binary,
    field: "02000000000000000000000000000000000000000000000000000000000000000000000000000000008000000000000000000001",
    a: "00",
    b: "01",
    gx: "0060F05F658F49C1AD3AB1890F7184210EFD0987E307C84C27ACCFB8F9F67CC2C460189EB5AAAA62EE222EB1B35540CFE9023746",
    gy: "01E369050B7C4E42ACBA1DACBF04299C3460782F918EA427E6325165E9EA10E3DA5F6C42E9C55215AA9CA27A5863EC48D8E0286B",
    order: "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE5F83B2D4EA20400EC4557D5ED3E3E7CA5B4B5C83B8E01E5FCF",
    cofactor: 4,
    security_level: 192,
};

/// sect409r1 (NIST B-409)
pub const SECT409R1: CurveParams = CurveParams {
    name: "sect409r1",
    field_type: FieldType::Binary,
    field: "02000000000000000000000000000000000000000000000000000000000000000000000000000000008000000000000000000001",
    a: "01",
    b: "0021A5C2C8EE9FEB5C4B9A753B7B476B7FD6422EF1F3DD674761FA99D6AC27C8A9A197B272822F6CD57A55AA4F50AE317B13545F",
    gx: "015D4860D088DDB3496B0C6064756260441CDE4AF1771D4DB01FFE5B34E59703DC255A868A1180515603AEAB60794E54BB7996A7",
    gy: "0061B1CFAB6BE5F32BBFA78324ED106A7636B9C5A7BD198D0158AA4F5488D08F38514F1FDF4B4F40D2181B3681C364BA0273C706",
    order: "010000000000000000000000000000000000000000000000000001E2AAD6A612F33307BE5FA47C3C9E052F838164CD37D9A21173",
    cofactor: 2,
    security_level: 192,
};

/// sect571k1 (NIST K-571)
pub const SECT571K1: CurveParams = CurveParams {
    name: "sect571k1",
    field_type: FieldType::Binary,
    field: "080000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000425",
    a: "00",
    b: "01",
    gx: "026EB7A859923FBC82189631F8103FE4AC9CA2970012D5D46024804801841CA44370958493B205E647DA304DB4CEB08CBBD1BA39494776FB988B47174DCA88C7E2945283A01C8972",
    gy: "0349DC807F4FBF374F4AEADE3BCA95314DD58CEC9F307A54FFC61EFC006D8A2C9D4979C0AC44AEA74FBEBBB9F772AEDCB620B01A7BA7AF1B320430C8591984F601CD4C143EF1C7A3",
    order: "020000000000000000000000000000000000000000000000000000000000000000000000131850E1F19A63E4B391A8DB917F4138B630D84BE5D639381E91DEB45CFE778F637C1001",
    cofactor: 4,
    security_level: 256,
};

/// sect571r1 (NIST B-571)
pub const SECT571R1: CurveParams = CurveParams {
    name: "sect571r1",
    field_type: FieldType::Binary,
    field: "080000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000425",
    a: "01",
    b: "02F40E7E2221F295DE297117B7F3D62F5C6A97FFCB8CEFF1CD6BA8CE4A9A18AD84FFABBD8EFA59332BE7AD6756A66E294AFD185A78FF12AA520E4DE739BACA0C7FFEFF7F2955727A",
    gx: "0303001D34B856296C16C0D40D3CD7750A93D1D2955FA80AA5F40FC8DB7B2ABDBDE53950F4C0D293CDD711A35B67FB1499AE60038614F1394ABFA3B4C850D927E1E7769C8EEC2D19",
    gy: "037BF27342DA639B6DCCFFFEB73D69D78C6C27A6009CBBCA1980F8533921E8A684423E43BAB08A576291AF8F461BB2A8B3531D2F0485C19B16E2F1516E23DD3C1A4827AF1B8AC15B",
    order: "03FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE661CE18FF55987308059B186823851EC7DD9CA1161DE93D5174D66E8382E9BB2FE84E47",
    cofactor: 2,
    security_level: 256,
};

/// All binary-field curves, smallest field first
pub const SEC2_BINARY_CURVES: [CurveParams; 18] = [
    SECT113R1,
    SECT113R2,
    SECT131R1,
    SECT131R2,
    SECT163K1,
    SECT163R1,
    SECT163R2,
    SECT193R1,
    SECT193R2,
    SECT233K1,
    SECT233R1,
    SECT239K1,
    SECT283K1,
    SECT283R1,
    SECT409K1,
    SECT409R1,
    SECT571K1,
    SECT571R1,
];
