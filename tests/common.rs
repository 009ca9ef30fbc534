#![allow(dead_code)]
use aamva_dlid::NaiveDate;

/// Sample 2000 card from the standard, issued by Virginia.
pub const V1_VIRGINIA: &str = "@\n\x1e\rANSI 6360000102DL00390187ZV02260031DLDAQ0123456789ABC\nDAAPUBLIC,JOHN,Q\nDAG123 MAIN STREET\nDAIANYTOWN\nDAJVA\nDAK123459999  \nDARDM  \nDAS          \nDAT     \nDAU509\nDAW175\nDAYBL \nDAZBR \nDBA20011201\nDBB19761123\nDBCM\nDBD19961201\rZVZVAJURISDICTIONDEFINEDELEMENT\r";

/// Same card, issued by Colorado.
pub const V1_COLORADO: &str = "@\n\x1e\rANSI 6360200102DL00390187ZV02260031DLDAQ0123456789ABC\nDAAJOHN,Q,PUBLIC\nDAG123 MAIN STREET\nDAIANYTOWN\nDAJVA\nDAK123459999  \nDARDM  \nDAS          \nDAT     \nDAU509\nDAW175\nDAYBL \nDAZBR \nDBA20011201\nDBB19761123\nDBCM\nDBD19961201\rZVZVAJURISDICTIONDEFINEDELEMENT\r";

pub const V3_TEXAS: &str = "@\n\x1e\rANSI 636015030002DL00410217ZT02020022DLDCAB\nDCBLP\nDCDP\nDBA04052018\nDCSJONES\nDCTJAMES ROBERT R\nDBD07082012\nDBB10111978\nDBC1\nDAYBRO\nDAU 70 IN\nDAG123 SOME STREET\nDAICITY 12\nDAJTX\nDAK902100000  \nDAQ22334455\nDCF11111111111111111111\nDCGUSA\nDCHB   \nDAZBRO\nDCU\rZTZTA220\nZTBW\n";

/// Sample 2009 card issued by Virginia.
pub const V4_VIRGINIA: &str = "@\n\x1e\rANSI 636000040002DL00410282ZV03190008DLDAQT64235789\nDCSSAMPLE\nDDEN\nDACMICHAEL\nDDFN\nDADJOHN,BOB\nDDGN\nDCUJR\nDCAD\nDCBK\nDCDPH\nDBD06062008\nDBB06071986\nDBA12102012\nDBC1\nDAU068 in\nDAYBRO\nDAG2300 WEST BROAD STREET\nDAIRICHMOND\nDAJVA\nDAK232690000 \nDCF2424244747474786102204\nDCGUSA\nDCK123456789\nDDAM\nDDB06062008\nDDC06062009\nDDD1\rZVZVA01\r";

/// The 2009 sample with a Canadian country and big-endian dates.
pub const V7_CANADA: &str = "@\n\x1e\rANSI 636000070002DL00410282ZV03190008DLDAQT64235789\nDCSSAMPLE\nDDEN\nDACMICHAEL\nDDFN\nDADJOHN,BOB\nDDGN\nDCUJR\nDCAD\nDCBK\nDCDPH\nDBD20080606\nDBB19860607\nDBA20121210\nDBC1\nDAU068 in\nDAYBRO\nDAG2300 WEST BROAD STREET\nDAIRICHMOND\nDAJVA\nDAK232690000 \nDCF2424244747474786102204\nDCGCAN\nDCK123456789\nDDAM\nDDB20080606\nDDC20090606\nDDD1\rZVZVA01\r";

/// The 2009 sample declared as another version.
pub fn v4_virginia_as(version: u8) -> String {
    V4_VIRGINIA.replacen("ANSI 63600004", &format!("ANSI 636000{version:02}"), 1)
}

/// Builds a single-subfile payload with correct offsets.
pub fn payload(issuer_id: &str, version: u8, subfile_type: &str, elements: &[&str]) -> String {
    let mut header = format!("@\n\x1e\rANSI {issuer_id}{version:02}");
    if version > 1 {
        header.push_str("00");
    }
    header.push_str("01");

    let subfile = format!("{subfile_type}{}\r", elements.join("\n"));
    let offset = header.len() + 10;

    format!(
        "{header}{subfile_type}{offset:04}{:04}{subfile}",
        subfile.len()
    )
}

pub fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
