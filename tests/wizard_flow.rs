//! 위저드 상태 기계 테스트: 선택 상한, 전이 가드, 뒤로 가기, 결과 지우기.

use co2sys_toolbox::carbonate::constants::KCarbonic;
use co2sys_toolbox::carbonate::parameters::Parameter;
use co2sys_toolbox::carbonate::solver::{
    CarbonateSolver, CarbonateState, SolveRequest, SolverError,
};
use co2sys_toolbox::carbonate::validation::RawEntries;
use co2sys_toolbox::wizard::{Wizard, WizardError, WizardStep};

/// 입력을 그대로 되돌려주는 스텁 솔버. 선택된 두 값이 결과에, 나머지는
/// 고정값이 들어가므로 표시 경로를 검증하기 쉽다.
struct EchoSolver;

impl CarbonateSolver for EchoSolver {
    fn solve(&self, request: &SolveRequest) -> Result<CarbonateState, SolverError> {
        let mut state = CarbonateState {
            alkalinity: 0.0,
            dic: 0.0,
            ph: 7.9,
            pco2: 420.0,
            u_alkalinity: 11.0,
            u_dic: 12.0,
            u_ph: 0.013,
            u_pco2: 14.0,
        };
        match request.par1_kind {
            Parameter::TotalAlkalinity => state.alkalinity = request.inputs.par1,
            Parameter::Dic => state.dic = request.inputs.par1,
            Parameter::PH => state.ph = request.inputs.par1,
            Parameter::PCo2 => state.pco2 = request.inputs.par1,
        }
        match request.par2_kind {
            Parameter::TotalAlkalinity => state.alkalinity = request.inputs.par2,
            Parameter::Dic => state.dic = request.inputs.par2,
            Parameter::PH => state.ph = request.inputs.par2,
            Parameter::PCo2 => state.pco2 = request.inputs.par2,
        }
        Ok(state)
    }
}

/// 항상 실패하는 스텁 솔버.
struct BrokenSolver;

impl CarbonateSolver for BrokenSolver {
    fn solve(&self, _request: &SolveRequest) -> Result<CarbonateState, SolverError> {
        Err(SolverError::Python("invalid parameter combination".into()))
    }
}

fn valid_entries() -> RawEntries {
    RawEntries::from_array([
        "2300", "2100", "35", "25", "10", "2", "2", "0.1", "0.05", "0.5",
    ])
}

/// 알칼리도 + DIC를 선택하고 상수 선택 단계까지 진행한 위저드.
fn wizard_at_constants() -> Wizard {
    let mut wizard = Wizard::new();
    assert!(wizard.toggle_parameter(Parameter::TotalAlkalinity));
    assert!(wizard.toggle_parameter(Parameter::Dic));
    wizard.confirm_parameters().expect("two picked");
    wizard.submit_values(&valid_entries()).expect("valid values");
    wizard
}

#[test]
fn third_pick_is_rejected_and_count_is_unchanged() {
    let mut wizard = Wizard::new();
    assert!(wizard.toggle_parameter(Parameter::TotalAlkalinity));
    assert!(wizard.toggle_parameter(Parameter::Dic));
    // 세 번째 체크는 거부되어 체크되지 않은 상태로 남는다.
    assert!(!wizard.toggle_parameter(Parameter::PH));
    assert!(!wizard.picks().contains(Parameter::PH));
    assert_eq!(wizard.picks().len(), 2);
    // 하나를 해제하면 다시 자리가 생긴다.
    assert!(!wizard.toggle_parameter(Parameter::Dic));
    assert!(wizard.toggle_parameter(Parameter::PH));
    assert_eq!(wizard.picks().len(), 2);
}

#[test]
fn advancing_with_fewer_than_two_picks_is_blocked() {
    let mut wizard = Wizard::new();
    assert!(matches!(
        wizard.confirm_parameters(),
        Err(WizardError::NeedTwoParameters)
    ));
    assert_eq!(wizard.step(), WizardStep::SelectingParameters);

    wizard.toggle_parameter(Parameter::PH);
    assert!(matches!(
        wizard.confirm_parameters(),
        Err(WizardError::NeedTwoParameters)
    ));
    assert_eq!(wizard.step(), WizardStep::SelectingParameters);
}

#[test]
fn chosen_pair_is_in_canonical_order_regardless_of_click_order() {
    let mut wizard = Wizard::new();
    wizard.toggle_parameter(Parameter::PCo2);
    wizard.toggle_parameter(Parameter::TotalAlkalinity);
    let (par1, par2) = wizard.picks().chosen_pair().expect("complete");
    assert_eq!(par1, Parameter::TotalAlkalinity);
    assert_eq!(par2, Parameter::PCo2);
    let (der1, der2) = wizard.picks().complement_pair().expect("complete");
    assert_eq!(der1, Parameter::Dic);
    assert_eq!(der2, Parameter::PH);
}

#[test]
fn invalid_values_do_not_advance_the_wizard() {
    let mut wizard = Wizard::new();
    wizard.toggle_parameter(Parameter::TotalAlkalinity);
    wizard.toggle_parameter(Parameter::Dic);
    wizard.confirm_parameters().expect("two picked");

    let missing = RawEntries::from_array([
        "1500", "", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1",
    ]);
    assert!(matches!(
        wizard.submit_values(&missing),
        Err(WizardError::Validation(_))
    ));
    assert_eq!(wizard.step(), WizardStep::EnteringValues);
    assert!(wizard.inputs().is_none());
}

#[test]
fn full_forward_flow_produces_four_result_lines() {
    let mut wizard = wizard_at_constants();
    let state = wizard.solve(&EchoSolver).expect("solve");
    assert_eq!(wizard.step(), WizardStep::ShowingResults);
    assert_eq!(state.alkalinity, 2300.0);
    assert_eq!(state.dic, 2100.0);

    let lines = wizard.result_lines();
    assert_eq!(lines.len(), 4);
    // 선택한 두 파라미터가 먼저, 사용자 입력 불확도와 함께 온다.
    assert_eq!(lines[0].parameter, Parameter::TotalAlkalinity);
    assert!(!lines[0].derived);
    assert_eq!(lines[0].value, 2300.0);
    assert_eq!(lines[0].uncertainty, 2.0);
    assert_eq!(lines[1].parameter, Parameter::Dic);
    assert_eq!(lines[1].uncertainty, 2.0);
    // 유도된 두 파라미터는 솔버가 전파한 불확도를 갖는다.
    assert_eq!(lines[2].parameter, Parameter::PH);
    assert!(lines[2].derived);
    assert_eq!(lines[2].uncertainty, 0.013);
    assert_eq!(lines[3].parameter, Parameter::PCo2);
    assert_eq!(lines[3].uncertainty, 14.0);
}

#[test]
fn solver_failure_keeps_the_constants_step() {
    let mut wizard = wizard_at_constants();
    assert!(matches!(
        wizard.solve(&BrokenSolver),
        Err(WizardError::Solver(_))
    ));
    assert_eq!(wizard.step(), WizardStep::SelectingConstants);
    assert!(wizard.results().is_none());
}

#[test]
fn solving_outside_the_constants_step_is_rejected() {
    let mut wizard = Wizard::new();
    assert!(matches!(
        wizard.solve(&EchoSolver),
        Err(WizardError::WrongStep)
    ));
}

#[test]
fn clear_results_reenables_constants_without_losing_the_selection() {
    let mut wizard = wizard_at_constants();
    wizard.constants_mut().k_carbonic = KCarbonic::LuekerEtAl2000;
    wizard.solve(&EchoSolver).expect("solve");

    wizard.clear_results();
    assert_eq!(wizard.step(), WizardStep::SelectingConstants);
    assert!(wizard.results().is_none());
    assert!(wizard.result_lines().is_empty());
    // 상수 선택은 그대로 남아 다시 풀 수 있다.
    assert_eq!(wizard.constants().k_carbonic, KCarbonic::LuekerEtAl2000);
    assert!(wizard.solve(&EchoSolver).is_ok());
}

#[test]
fn backing_out_of_constants_unfreezes_values() {
    let mut wizard = wizard_at_constants();
    wizard.back();
    assert_eq!(wizard.step(), WizardStep::EnteringValues);
    assert!(wizard.inputs().is_none());
    // 같은 값을 다시 제출하면 다시 진행된다.
    wizard.submit_values(&valid_entries()).expect("resubmit");
    assert_eq!(wizard.step(), WizardStep::SelectingConstants);
}

#[test]
fn backing_out_of_values_returns_to_selection_with_picks_kept() {
    let mut wizard = Wizard::new();
    wizard.toggle_parameter(Parameter::PH);
    wizard.toggle_parameter(Parameter::PCo2);
    wizard.confirm_parameters().expect("two picked");
    wizard.back();
    assert_eq!(wizard.step(), WizardStep::SelectingParameters);
    // 체크박스 상태는 유지되고 선택을 바꿀 수 있다.
    assert!(wizard.picks().contains(Parameter::PH));
    assert!(!wizard.toggle_parameter(Parameter::PH));
    assert!(wizard.toggle_parameter(Parameter::Dic));
}

#[test]
fn back_on_the_first_step_is_a_no_op() {
    let mut wizard = Wizard::new();
    wizard.back();
    assert_eq!(wizard.step(), WizardStep::SelectingParameters);
}

#[test]
fn constants_default_to_the_documented_entries() {
    let wizard = Wizard::new();
    let constants = wizard.constants();
    assert_eq!(constants.k_carbonic.code(), 16); // Sulphis et al. (2020)
    assert_eq!(constants.k_bisulfate.code(), 1); // Dickson (1990)
    assert_eq!(constants.total_borate.code(), 1); // Uppström (1974)
    assert_eq!(constants.k_fluoride.code(), 1); // Dickson & Riley (1979)
}
