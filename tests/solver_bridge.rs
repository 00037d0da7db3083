//! PyCO2SYS 브리지 점검. 파이썬 환경에 PyCO2SYS가 설치돼 있어야 해서
//! 기본으로는 건너뛴다: cargo test -- --ignored 로 실행.

use co2sys_toolbox::carbonate::constants::ConstantSetSelection;
use co2sys_toolbox::carbonate::parameters::Parameter;
use co2sys_toolbox::carbonate::solver::{CarbonateSolver, PyCo2SysSolver, SolveRequest};
use co2sys_toolbox::carbonate::validation::MeasurementInput;

#[test]
#[ignore]
fn alkalinity_and_dic_round_trip_through_pyco2sys() {
    let request = SolveRequest {
        par1_kind: Parameter::TotalAlkalinity,
        par2_kind: Parameter::Dic,
        inputs: MeasurementInput {
            par1: 2300.0,
            par2: 2100.0,
            salinity: 35.0,
            temperature: 25.0,
            pressure: 10.0,
            par1_uncertainty: 2.0,
            par2_uncertainty: 2.0,
            salinity_uncertainty: 0.1,
            temperature_uncertainty: 0.05,
            pressure_uncertainty: 0.5,
        },
        constants: ConstantSetSelection::default(),
    };
    let state = PyCo2SysSolver.solve(&request).expect("PyCO2SYS available");

    // 입력한 두 파라미터는 그대로 돌아온다.
    assert!((state.alkalinity - 2300.0).abs() < 1e-6);
    assert!((state.dic - 2100.0).abs() < 1e-6);
    // 유도된 값들은 해수에서 기대되는 범위 안에 있어야 한다.
    assert!(state.ph > 6.0 && state.ph < 9.0, "pH={}", state.ph);
    assert!(state.pco2 > 0.0, "pCO2={}", state.pco2);
    // 불확도 전파 요청이 반영됐는지 확인한다.
    assert!(state.u_ph > 0.0);
    assert!(state.u_pco2 > 0.0);
}
