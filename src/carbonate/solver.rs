//! 외부 탄산계 솔버(PyCO2SYS) 경계. 화학 계산과 불확도 전파는 전부 솔버 안에 있고,
//! 이 모듈은 호출 한 번을 마샬링하는 역할만 한다.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

use super::constants::ConstantSetSelection;
use super::parameters::Parameter;
use super::validation::MeasurementInput;

/// 솔버 호출 한 번에 필요한 전체 입력.
#[derive(Debug, Clone, Copy)]
pub struct SolveRequest {
    pub par1_kind: Parameter,
    pub par2_kind: Parameter,
    pub inputs: MeasurementInput,
    pub constants: ConstantSetSelection,
}

/// 네 파라미터의 계산 값과 솔버가 전파한 불확도.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonateState {
    pub alkalinity: f64,
    pub dic: f64,
    pub ph: f64,
    pub pco2: f64,
    pub u_alkalinity: f64,
    pub u_dic: f64,
    pub u_ph: f64,
    pub u_pco2: f64,
}

impl CarbonateState {
    /// 파라미터 종류별 계산 값.
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::TotalAlkalinity => self.alkalinity,
            Parameter::Dic => self.dic,
            Parameter::PH => self.ph,
            Parameter::PCo2 => self.pco2,
        }
    }

    /// 파라미터 종류별 전파 불확도.
    pub fn uncertainty(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::TotalAlkalinity => self.u_alkalinity,
            Parameter::Dic => self.u_dic,
            Parameter::PH => self.u_ph,
            Parameter::PCo2 => self.u_pco2,
        }
    }
}

/// 외부 솔버 호출 오류.
#[derive(Debug)]
pub enum SolverError {
    /// PyCO2SYS 모듈을 불러오지 못함 (파이썬 환경 문제)
    Unavailable(String),
    /// 솔버 실행 중 파이썬 측 오류 (허용 범위 밖 입력 등)
    Python(String),
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::Unavailable(msg) => {
                write!(f, "PyCO2SYS를 불러오지 못했습니다: {msg}")
            }
            SolverError::Python(msg) => write!(f, "외부 솔버 오류: {msg}"),
        }
    }
}

impl std::error::Error for SolverError {}

/// 탄산계 솔버와의 경계. 테스트에서는 스텁 구현으로 대체한다.
pub trait CarbonateSolver {
    fn solve(&self, request: &SolveRequest) -> Result<CarbonateState, SolverError>;
}

/// PyCO2SYS를 내장 파이썬 인터프리터로 호출하는 기본 구현.
/// 재시도 없이 호출 한 번을 그대로 전달한다.
#[derive(Debug, Default)]
pub struct PyCo2SysSolver;

impl CarbonateSolver for PyCo2SysSolver {
    fn solve(&self, request: &SolveRequest) -> Result<CarbonateState, SolverError> {
        Python::with_gil(|py| {
            let module = py
                .import_bound("PyCO2SYS")
                .map_err(|e| SolverError::Unavailable(e.to_string()))?;
            call_sys(py, &module, request).map_err(|e| SolverError::Python(e.to_string()))
        })
    }
}

fn call_sys(
    py: Python<'_>,
    module: &Bound<'_, PyModule>,
    request: &SolveRequest,
) -> PyResult<CarbonateState> {
    let inputs = &request.inputs;
    let constants = request.constants;

    let kwargs = PyDict::new_bound(py);
    kwargs.set_item("par1", inputs.par1)?;
    kwargs.set_item("par2", inputs.par2)?;
    kwargs.set_item("par1_type", request.par1_kind.type_code())?;
    kwargs.set_item("par2_type", request.par2_kind.type_code())?;
    kwargs.set_item("opt_k_carbonic", constants.k_carbonic.code())?;
    kwargs.set_item("opt_k_bisulfate", constants.k_bisulfate.code())?;
    kwargs.set_item("opt_total_borate", constants.total_borate.code())?;
    kwargs.set_item("opt_k_fluoride", constants.k_fluoride.code())?;
    kwargs.set_item("salinity", inputs.salinity)?;
    kwargs.set_item("temperature", inputs.temperature)?;
    kwargs.set_item("pressure", inputs.pressure)?;

    // 네 파라미터 모두에 대해 불확도 전파를 요청한다.
    let into: Vec<&str> = Parameter::ALL.iter().map(|p| p.output_key()).collect();
    kwargs.set_item("uncertainty_into", into)?;

    let from = PyDict::new_bound(py);
    from.set_item("par1", inputs.par1_uncertainty)?;
    from.set_item("par2", inputs.par2_uncertainty)?;
    from.set_item("salinity", inputs.salinity_uncertainty)?;
    from.set_item("temperature", inputs.temperature_uncertainty)?;
    from.set_item("pressure", inputs.pressure_uncertainty)?;
    kwargs.set_item("uncertainty_from", from)?;

    let result = module.call_method("sys", (), Some(&kwargs))?;
    let get = |key: &str| -> PyResult<f64> { result.get_item(key)?.extract::<f64>() };
    Ok(CarbonateState {
        alkalinity: get("alkalinity")?,
        dic: get("dic")?,
        ph: get("pH")?,
        pco2: get("pCO2")?,
        u_alkalinity: get("u_alkalinity")?,
        u_dic: get("u_dic")?,
        u_ph: get("u_pH")?,
        u_pco2: get("u_pCO2")?,
    })
}
