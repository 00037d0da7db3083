use crate::carbonate::solver::CarbonateSolver;
use crate::history::{HistoryError, ResultHistory, ResultRecord};
use crate::wizard::{Wizard, WizardError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 위저드 전이/검증/솔버 오류
    Wizard(WizardError),
    /// 결과 이력 워크북 오류
    History(HistoryError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Wizard(e) => write!(f, "{e}"),
            AppError::History(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<WizardError> for AppError {
    fn from(value: WizardError) -> Self {
        AppError::Wizard(value)
    }
}

impl From<HistoryError> for AppError {
    fn from(value: HistoryError) -> Self {
        AppError::History(value)
    }
}

/// "Get Results" 버튼 한 번에 해당하는 오케스트레이션:
/// 솔버를 호출해 위저드를 결과 단계로 전이시키고, 타임스탬프가 찍힌
/// 레코드를 이력 워크북에 추가한다. 솔버 실패 시에는 아무것도 기록되지 않는다.
pub fn solve_and_record(
    wizard: &mut Wizard,
    solver: &dyn CarbonateSolver,
    history: &ResultHistory,
) -> Result<ResultRecord, AppError> {
    let state = wizard.solve(solver)?;
    let record = ResultRecord::now(state);
    history.append(&record)?;
    Ok(record)
}
