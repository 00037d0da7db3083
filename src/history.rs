//! 결과 이력 워크북. 계산이 성공할 때마다 고정 헤더 바로 아래에 한 행을
//! 끼워 넣고 같은 경로에 저장한다. 기존 행은 프로그램이 수정하거나 지우지 않는다.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use umya_spreadsheet::Spreadsheet;

use crate::carbonate::solver::CarbonateState;

/// 원본 양식이 쓰던 기본 워크북 파일명.
pub const DEFAULT_HISTORY_FILE: &str = "PyCO2Sys_Result_History.xlsx";

/// 헤더 블록 바로 아래, 새 행이 항상 들어가는 위치. 최신 결과가 맨 위에 온다.
const INSERT_ROW: u32 = 4;

/// 스프레드시트 한 행으로 영속화되는 계산 결과.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub timestamp: DateTime<Local>,
    pub state: CarbonateState,
}

impl ResultRecord {
    /// 현재 시각을 생성 시점으로 하는 레코드를 만든다.
    pub fn now(state: CarbonateState) -> Self {
        Self {
            timestamp: Local::now(),
            state,
        }
    }
}

/// 워크북 입출력 오류.
#[derive(Debug)]
pub enum HistoryError {
    /// 워크북 읽기 실패
    Read(String),
    /// 워크북 쓰기 실패
    Write(String),
    /// 첫 번째 시트가 없음
    MissingSheet,
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Read(msg) => write!(f, "이력 워크북 읽기 오류: {msg}"),
            HistoryError::Write(msg) => write!(f, "이력 워크북 쓰기 오류: {msg}"),
            HistoryError::MissingSheet => write!(f, "이력 워크북에 시트가 없습니다"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// 결과 이력 워크북 핸들. 경로만 쥐고 있고 호출 한 번 안에서
/// 열기-수정-저장을 끝낸다.
#[derive(Debug, Clone)]
pub struct ResultHistory {
    path: PathBuf,
}

impl ResultHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 워크북을 열고(없으면 헤더와 함께 생성) 4행에 새 행을 삽입한 뒤 저장한다.
    pub fn append(&self, record: &ResultRecord) -> Result<(), HistoryError> {
        let mut book = self.load_or_create()?;
        let sheet = book
            .get_sheet_mut(&0)
            .ok_or(HistoryError::MissingSheet)?;
        sheet.insert_new_row(&INSERT_ROW, &1);

        let state = &record.state;
        sheet
            .get_cell_mut("A4")
            .set_value(record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
        sheet.get_cell_mut("B4").set_value_number(state.alkalinity);
        sheet.get_cell_mut("C4").set_value_number(state.dic);
        sheet.get_cell_mut("D4").set_value_number(state.ph);
        sheet.get_cell_mut("E4").set_value_number(state.pco2);
        // F열은 원본 양식 그대로 비워 둔다.
        sheet
            .get_cell_mut("G4")
            .set_value_number(state.u_alkalinity);
        sheet.get_cell_mut("H4").set_value_number(state.u_dic);
        sheet.get_cell_mut("I4").set_value_number(state.u_ph);
        sheet.get_cell_mut("J4").set_value_number(state.u_pco2);

        umya_spreadsheet::writer::xlsx::write(&book, &self.path)
            .map_err(|e| HistoryError::Write(format!("{e:?}")))
    }

    fn load_or_create(&self) -> Result<Spreadsheet, HistoryError> {
        if self.path.exists() {
            return umya_spreadsheet::reader::xlsx::read(&self.path)
                .map_err(|e| HistoryError::Read(format!("{e:?}")));
        }
        // 첫 실행이면 원본 양식과 같은 배치의 헤더를 가진 워크북을 만든다.
        let mut book = umya_spreadsheet::new_file();
        let sheet = book
            .get_sheet_mut(&0)
            .ok_or(HistoryError::MissingSheet)?;
        sheet.get_cell_mut("A1").set_value("CO2Sys Result History");
        sheet.get_cell_mut("A3").set_value("Timestamp");
        sheet.get_cell_mut("B3").set_value("Alkalinity (μmol/kg)");
        sheet.get_cell_mut("C3").set_value("DIC (μmol/kg)");
        sheet.get_cell_mut("D3").set_value("pH");
        sheet.get_cell_mut("E3").set_value("pCO2 (μatm)");
        sheet.get_cell_mut("G3").set_value("u(Alkalinity)");
        sheet.get_cell_mut("H3").set_value("u(DIC)");
        sheet.get_cell_mut("I3").set_value("u(pH)");
        sheet.get_cell_mut("J3").set_value("u(pCO2)");
        Ok(book)
    }
}
