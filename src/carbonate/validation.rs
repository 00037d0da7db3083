/// 값 입력 패널의 10개 원문 필드. 순서는 원본 폼과 같다:
/// 두 파라미터 값, 염분, 온도, 압력, 그리고 같은 순서의 불확도 다섯 개.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntries {
    pub par1: String,
    pub par2: String,
    pub salinity: String,
    pub temperature: String,
    pub pressure: String,
    pub par1_uncertainty: String,
    pub par2_uncertainty: String,
    pub salinity_uncertainty: String,
    pub temperature_uncertainty: String,
    pub pressure_uncertainty: String,
}

impl RawEntries {
    /// 값 다섯 개 + 불확도 다섯 개 순서의 배열로부터 생성한다.
    pub fn from_array(fields: [&str; 10]) -> Self {
        Self {
            par1: fields[0].to_string(),
            par2: fields[1].to_string(),
            salinity: fields[2].to_string(),
            temperature: fields[3].to_string(),
            pressure: fields[4].to_string(),
            par1_uncertainty: fields[5].to_string(),
            par2_uncertainty: fields[6].to_string(),
            salinity_uncertainty: fields[7].to_string(),
            temperature_uncertainty: fields[8].to_string(),
            pressure_uncertainty: fields[9].to_string(),
        }
    }

    fn as_array(&self) -> [&str; 10] {
        [
            &self.par1,
            &self.par2,
            &self.salinity,
            &self.temperature,
            &self.pressure,
            &self.par1_uncertainty,
            &self.par2_uncertainty,
            &self.salinity_uncertainty,
            &self.temperature_uncertainty,
            &self.pressure_uncertainty,
        ]
    }
}

/// 검증을 통과해 동결된 수치 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementInput {
    pub par1: f64,
    pub par2: f64,
    pub salinity: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub par1_uncertainty: f64,
    pub par2_uncertainty: f64,
    pub salinity_uncertainty: f64,
    pub temperature_uncertainty: f64,
    pub pressure_uncertainty: f64,
}

/// 입력 검증 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// 하나 이상의 필드가 비어 있음
    FieldsMissing,
    /// 하나 이상의 필드가 숫자가 아님
    NonNumeric,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::FieldsMissing => write!(f, "값이 비어 있는 입력 필드가 있습니다"),
            ValidationError::NonNumeric => write!(f, "숫자가 아닌 입력이 있습니다"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// 원본 폼의 "소수점 제거 후 전부 숫자" 검사.
/// 음수 부호와 지수 표기도 거부하며, 이 동작은 의도적으로 유지한다.
fn is_crude_numeric(field: &str) -> bool {
    let stripped: String = field.chars().filter(|&c| c != '.').collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

/// 10개 필드를 순서대로 검증한다: 빈 필드 → 숫자 검사 → f64 파싱.
/// 소수점이 여러 개라 파싱이 실패하는 문자열은 숫자 검사와 같은 오류로 보고한다.
pub fn validate(entries: &RawEntries) -> Result<MeasurementInput, ValidationError> {
    let fields = entries.as_array();
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::FieldsMissing);
    }
    if fields.iter().any(|f| !is_crude_numeric(f)) {
        return Err(ValidationError::NonNumeric);
    }
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::NonNumeric)
    };
    Ok(MeasurementInput {
        par1: parse(fields[0])?,
        par2: parse(fields[1])?,
        salinity: parse(fields[2])?,
        temperature: parse(fields[3])?,
        pressure: parse(fields[4])?,
        par1_uncertainty: parse(fields[5])?,
        par2_uncertainty: parse(fields[6])?,
        salinity_uncertainty: parse(fields[7])?,
        temperature_uncertainty: parse(fields[8])?,
        pressure_uncertainty: parse(fields[9])?,
    })
}
