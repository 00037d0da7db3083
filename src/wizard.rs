//! 네 패널을 앞뒤로만 오가는 위저드 상태 기계.
//! 화면 전역 상태 대신 현재 단계와 동결된 입력을 한 컨텍스트에 모아 둔다.

use crate::carbonate::constants::ConstantSetSelection;
use crate::carbonate::parameters::Parameter;
use crate::carbonate::selection::ParameterPicks;
use crate::carbonate::solver::{CarbonateSolver, CarbonateState, SolveRequest, SolverError};
use crate::carbonate::validation::{self, MeasurementInput, RawEntries, ValidationError};

/// 위저드의 네 단계. 전이는 버튼 입력으로만 일어난다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectingParameters,
    EnteringValues,
    SelectingConstants,
    ShowingResults,
}

impl WizardStep {
    /// 뒤로 가기가 도착하는 단계. 첫 단계에서는 None.
    pub fn prev(self) -> Option<Self> {
        match self {
            WizardStep::SelectingParameters => None,
            WizardStep::EnteringValues => Some(WizardStep::SelectingParameters),
            WizardStep::SelectingConstants => Some(WizardStep::EnteringValues),
            WizardStep::ShowingResults => Some(WizardStep::SelectingConstants),
        }
    }
}

/// 단계 전이 시 발생 가능한 오류.
#[derive(Debug)]
pub enum WizardError {
    /// 파라미터가 정확히 2개 선택되지 않음
    NeedTwoParameters,
    /// 입력 필드 검증 실패
    Validation(ValidationError),
    /// 외부 솔버 호출 실패
    Solver(SolverError),
    /// 현재 단계에서 허용되지 않는 동작
    WrongStep,
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::NeedTwoParameters => {
                write!(f, "파라미터를 정확히 2개 선택해야 합니다")
            }
            WizardError::Validation(e) => write!(f, "입력 검증 오류: {e}"),
            WizardError::Solver(e) => write!(f, "솔버 오류: {e}"),
            WizardError::WrongStep => write!(f, "현재 단계에서는 수행할 수 없는 동작입니다"),
        }
    }
}

impl std::error::Error for WizardError {}

impl From<ValidationError> for WizardError {
    fn from(value: ValidationError) -> Self {
        WizardError::Validation(value)
    }
}

impl From<SolverError> for WizardError {
    fn from(value: SolverError) -> Self {
        WizardError::Solver(value)
    }
}

/// 결과 패널의 한 줄: 파라미터, 값, 함께 표시할 불확도.
/// 사용자가 직접 측정한 파라미터는 입력 불확도를, 유도된 파라미터는
/// 솔버가 전파한 불확도를 갖는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultLine {
    pub parameter: Parameter,
    pub value: f64,
    pub uncertainty: f64,
    pub derived: bool,
}

/// 상태 기계와 지금까지 동결된 입력을 함께 담는 위저드 컨텍스트.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    picks: ParameterPicks,
    inputs: Option<MeasurementInput>,
    constants: ConstantSetSelection,
    results: Option<CarbonateState>,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectingParameters,
            picks: ParameterPicks::new(2),
            inputs: None,
            constants: ConstantSetSelection::default(),
            results: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn picks(&self) -> &ParameterPicks {
        &self.picks
    }

    pub fn inputs(&self) -> Option<&MeasurementInput> {
        self.inputs.as_ref()
    }

    pub fn constants(&self) -> ConstantSetSelection {
        self.constants
    }

    /// 상수 세트는 선택 단계에서만 바뀌어야 하므로 GUI는 step()을 확인하고 호출한다.
    pub fn constants_mut(&mut self) -> &mut ConstantSetSelection {
        &mut self.constants
    }

    pub fn results(&self) -> Option<&CarbonateState> {
        self.results.as_ref()
    }

    /// 파라미터 선택 단계에서 체크 상태를 토글한다. 반환값은 토글 후 체크 여부.
    /// 상한(2개)을 넘는 체크는 선택 집합이 거부하므로 false가 돌아온다.
    pub fn toggle_parameter(&mut self, parameter: Parameter) -> bool {
        if self.step != WizardStep::SelectingParameters {
            return self.picks.contains(parameter);
        }
        if self.picks.contains(parameter) {
            self.picks.unpick(parameter);
            false
        } else {
            self.picks.pick(parameter)
        }
    }

    /// 선택 → 값 입력 전이. 정확히 2개가 선택돼 있어야 한다.
    pub fn confirm_parameters(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::SelectingParameters {
            return Err(WizardError::WrongStep);
        }
        if !self.picks.is_complete() {
            return Err(WizardError::NeedTwoParameters);
        }
        self.step = WizardStep::EnteringValues;
        Ok(())
    }

    /// 값 입력 → 상수 선택 전이. 10개 필드를 검증해 통과하면 동결한다.
    pub fn submit_values(&mut self, entries: &RawEntries) -> Result<(), WizardError> {
        if self.step != WizardStep::EnteringValues {
            return Err(WizardError::WrongStep);
        }
        let parsed = validation::validate(entries)?;
        self.inputs = Some(parsed);
        self.step = WizardStep::SelectingConstants;
        Ok(())
    }

    /// 상수 선택 → 결과 전이. 솔버를 한 번 호출하고 성공 시에만 전이한다.
    pub fn solve(&mut self, solver: &dyn CarbonateSolver) -> Result<CarbonateState, WizardError> {
        if self.step != WizardStep::SelectingConstants {
            return Err(WizardError::WrongStep);
        }
        let (par1_kind, par2_kind) = self
            .picks
            .chosen_pair()
            .ok_or(WizardError::NeedTwoParameters)?;
        let inputs = self.inputs.ok_or(WizardError::WrongStep)?;
        let request = SolveRequest {
            par1_kind,
            par2_kind,
            inputs,
            constants: self.constants,
        };
        let state = solver.solve(&request)?;
        self.results = Some(state);
        self.step = WizardStep::ShowingResults;
        Ok(state)
    }

    /// 한 단계 뒤로. 이전 단계의 입력은 다시 편집 가능해지고,
    /// 그보다 앞으로 진행됐던 것들은 버려진다.
    pub fn back(&mut self) {
        let Some(prev) = self.step.prev() else {
            return;
        };
        match self.step {
            WizardStep::SelectingParameters => {}
            WizardStep::EnteringValues => {
                // 선택 단계로 돌아가면 앞선 패널에서 만들어진 것은 전부 버린다.
                self.inputs = None;
                self.constants = ConstantSetSelection::default();
                self.results = None;
            }
            WizardStep::SelectingConstants => {
                // 동결을 풀고 상수 세트는 기본값으로 되돌린다(패널이 새로 만들어지는 것과 같다).
                self.inputs = None;
                self.constants = ConstantSetSelection::default();
                self.results = None;
            }
            WizardStep::ShowingResults => {
                // 결과 표시만 지우고 상수 선택은 유지한다.
                self.results = None;
            }
        }
        self.step = prev;
    }

    /// 결과 지우기: 표시를 비우고 상수 선택 패널을 다시 활성화한다.
    /// 이미 기록된 스프레드시트 행에는 손대지 않는다.
    pub fn clear_results(&mut self) {
        if self.step == WizardStep::ShowingResults {
            self.back();
        }
    }

    /// 결과 패널에 표시할 네 줄. 선택한 두 파라미터가 먼저 온다.
    pub fn result_lines(&self) -> Vec<ResultLine> {
        let (Some(state), Some(inputs)) = (self.results.as_ref(), self.inputs.as_ref()) else {
            return Vec::new();
        };
        let (Some((par1, par2)), Some((derived1, derived2))) =
            (self.picks.chosen_pair(), self.picks.complement_pair())
        else {
            return Vec::new();
        };
        vec![
            ResultLine {
                parameter: par1,
                value: state.value(par1),
                uncertainty: inputs.par1_uncertainty,
                derived: false,
            },
            ResultLine {
                parameter: par2,
                value: state.value(par2),
                uncertainty: inputs.par2_uncertainty,
                derived: false,
            },
            ResultLine {
                parameter: derived1,
                value: state.value(derived1),
                uncertainty: state.uncertainty(derived1),
                derived: true,
            },
            ResultLine {
                parameter: derived2,
                value: state.value(derived2),
                uncertainty: state.uncertainty(derived2),
                derived: true,
            },
        ]
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
