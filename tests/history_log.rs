//! 결과 이력 워크북 테스트. 새 행이 항상 헤더 아래 4행에 들어가고
//! 기존 행은 아래로 밀리기만 하는지 확인한다.

use chrono::Local;
use co2sys_toolbox::carbonate::solver::CarbonateState;
use co2sys_toolbox::history::{ResultHistory, ResultRecord};

fn state(alkalinity: f64) -> CarbonateState {
    CarbonateState {
        alkalinity,
        dic: 2100.5,
        ph: 7.85,
        pco2: 420.25,
        u_alkalinity: 11.5,
        u_dic: 12.5,
        u_ph: 0.02,
        u_pco2: 14.5,
    }
}

#[test]
fn append_creates_the_workbook_and_writes_row_four() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.xlsx");
    let history = ResultHistory::new(&path);

    let before = Local::now();
    let record = ResultRecord::now(state(2300.5));
    assert!(record.timestamp >= before, "timestamp must not precede invocation");
    history.append(&record).expect("append");
    assert!(path.exists());

    let book = umya_spreadsheet::reader::xlsx::read(&path).expect("reload");
    let sheet = book.get_sheet(&0).expect("first sheet");
    assert_eq!(sheet.get_value("A3"), "Timestamp");
    let stamp = sheet.get_value("A4");
    assert!(!stamp.is_empty());
    assert_eq!(stamp, record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
    assert_eq!(sheet.get_value("B4"), "2300.5");
    assert_eq!(sheet.get_value("C4"), "2100.5");
    assert_eq!(sheet.get_value("D4"), "7.85");
    assert_eq!(sheet.get_value("E4"), "420.25");
    // F열은 비워 둔다.
    assert_eq!(sheet.get_value("F4"), "");
    assert_eq!(sheet.get_value("G4"), "11.5");
    assert_eq!(sheet.get_value("H4"), "12.5");
    assert_eq!(sheet.get_value("I4"), "0.02");
    assert_eq!(sheet.get_value("J4"), "14.5");
}

#[test]
fn newest_row_is_inserted_on_top_and_older_rows_shift_down() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.xlsx");
    let history = ResultHistory::new(&path);

    history.append(&ResultRecord::now(state(1111.0))).expect("first");
    history.append(&ResultRecord::now(state(2222.0))).expect("second");

    let book = umya_spreadsheet::reader::xlsx::read(&path).expect("reload");
    let sheet = book.get_sheet(&0).expect("first sheet");
    assert_eq!(sheet.get_value("B4"), "2222");
    assert_eq!(sheet.get_value("B5"), "1111");
    // 헤더는 제자리에 남는다.
    assert_eq!(sheet.get_value("A3"), "Timestamp");
}

#[test]
fn append_does_not_rewrite_existing_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.xlsx");
    let history = ResultHistory::new(&path);

    let first = ResultRecord::now(state(1111.0));
    history.append(&first).expect("first");
    let first_stamp = first.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();

    history.append(&ResultRecord::now(state(2222.0))).expect("second");

    let book = umya_spreadsheet::reader::xlsx::read(&path).expect("reload");
    let sheet = book.get_sheet(&0).expect("first sheet");
    // 기존 행은 내용 그대로 한 줄 밀려났다.
    assert_eq!(sheet.get_value("A5"), first_stamp);
    assert_eq!(sheet.get_value("G5"), "11.5");
}
