//! 솔버에 넘길 평형상수 세트 선택지. 각 목록은 발표된 파라미터화들이며
//! 코드는 목록 순서의 1-기반 번호다.

/// 탄산(H2CO3) 평형상수 K1/K2 파라미터화.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KCarbonic {
    RoyEtAl1993,
    GoyetPoisson1989,
    HanssonRefit1987,
    MehrbachRefit1987,
    HanssonMehrbachRefit1987,
    GeosecsNbs1973,
    PengNbs1973,
    Millero1979,
    CaiWang1998,
    LuekerEtAl2000,
    MojicaPrietoMillero2002,
    MilleroEtAl2002,
    MilleroEtAl2006,
    Millero2010,
    WatersEtAl2014,
    SulphisEtAl2020,
    SchockmanByrne2021,
}

impl KCarbonic {
    pub const ALL: [KCarbonic; 17] = [
        KCarbonic::RoyEtAl1993,
        KCarbonic::GoyetPoisson1989,
        KCarbonic::HanssonRefit1987,
        KCarbonic::MehrbachRefit1987,
        KCarbonic::HanssonMehrbachRefit1987,
        KCarbonic::GeosecsNbs1973,
        KCarbonic::PengNbs1973,
        KCarbonic::Millero1979,
        KCarbonic::CaiWang1998,
        KCarbonic::LuekerEtAl2000,
        KCarbonic::MojicaPrietoMillero2002,
        KCarbonic::MilleroEtAl2002,
        KCarbonic::MilleroEtAl2006,
        KCarbonic::Millero2010,
        KCarbonic::WatersEtAl2014,
        KCarbonic::SulphisEtAl2020,
        KCarbonic::SchockmanByrne2021,
    ];

    /// 발표 문헌 표기 그대로의 표시 라벨.
    pub fn label(self) -> &'static str {
        match self {
            KCarbonic::RoyEtAl1993 => "Roy et al. (1993)",
            KCarbonic::GoyetPoisson1989 => "Goyet & Poisson (1989)",
            KCarbonic::HanssonRefit1987 => "Hansson (1973) refit by Dickson & Millero (1987)",
            KCarbonic::MehrbachRefit1987 => {
                "Mehrbach et al. (1973) refit by Dickson & Millero (1987)"
            }
            KCarbonic::HanssonMehrbachRefit1987 => {
                "Hansson & Mehrbach refit by Dickson & Millero (1987)"
            }
            KCarbonic::GeosecsNbs1973 => {
                "GEOSECS constants (NBS scale) from Mehrbach et al. (1973)"
            }
            KCarbonic::PengNbs1973 => {
                "Constants from Peng et al. (NBS scale) from Mehrbach et al. (1973)"
            }
            KCarbonic::Millero1979 => "Millero (1979)",
            KCarbonic::CaiWang1998 => "Cai & Wang (1998)",
            KCarbonic::LuekerEtAl2000 => "Lueker et al. (2000)",
            KCarbonic::MojicaPrietoMillero2002 => "Mojica Prieto & Millero (2002)",
            KCarbonic::MilleroEtAl2002 => "Millero et al. (2002)",
            KCarbonic::MilleroEtAl2006 => "Millero et al. (2006)",
            KCarbonic::Millero2010 => "Millero (2010)",
            KCarbonic::WatersEtAl2014 => "Waters et al. (2014)",
            KCarbonic::SulphisEtAl2020 => "Sulphis et al. (2020)",
            KCarbonic::SchockmanByrne2021 => "Schockman & Byrne (2021)",
        }
    }

    /// 솔버의 `opt_k_carbonic` 코드.
    pub fn code(self) -> u8 {
        match self {
            KCarbonic::RoyEtAl1993 => 1,
            KCarbonic::GoyetPoisson1989 => 2,
            KCarbonic::HanssonRefit1987 => 3,
            KCarbonic::MehrbachRefit1987 => 4,
            KCarbonic::HanssonMehrbachRefit1987 => 5,
            KCarbonic::GeosecsNbs1973 => 6,
            KCarbonic::PengNbs1973 => 7,
            KCarbonic::Millero1979 => 8,
            KCarbonic::CaiWang1998 => 9,
            KCarbonic::LuekerEtAl2000 => 10,
            KCarbonic::MojicaPrietoMillero2002 => 11,
            KCarbonic::MilleroEtAl2002 => 12,
            KCarbonic::MilleroEtAl2006 => 13,
            KCarbonic::Millero2010 => 14,
            KCarbonic::WatersEtAl2014 => 15,
            KCarbonic::SulphisEtAl2020 => 16,
            KCarbonic::SchockmanByrne2021 => 17,
        }
    }
}

impl Default for KCarbonic {
    fn default() -> Self {
        KCarbonic::SulphisEtAl2020
    }
}

/// 황산수소(HSO4-) 평형상수 파라미터화.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KBisulfate {
    Dickson1990,
    KhooEtAl1977,
    WatersMillero2013,
}

impl KBisulfate {
    pub const ALL: [KBisulfate; 3] = [
        KBisulfate::Dickson1990,
        KBisulfate::KhooEtAl1977,
        KBisulfate::WatersMillero2013,
    ];

    pub fn label(self) -> &'static str {
        match self {
            KBisulfate::Dickson1990 => "Dickson (1990)",
            KBisulfate::KhooEtAl1977 => "Khoo et al. (1977)",
            KBisulfate::WatersMillero2013 => "Waters & Millero (2013) / Waters et al. (2014)",
        }
    }

    /// 솔버의 `opt_k_bisulfate` 코드.
    pub fn code(self) -> u8 {
        match self {
            KBisulfate::Dickson1990 => 1,
            KBisulfate::KhooEtAl1977 => 2,
            KBisulfate::WatersMillero2013 => 3,
        }
    }
}

impl Default for KBisulfate {
    fn default() -> Self {
        KBisulfate::Dickson1990
    }
}

/// 총붕소 농도 파라미터화.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalBorate {
    Uppstrom1974,
    LeeEtAl2010,
    KulinskiEtAl2018,
}

impl TotalBorate {
    pub const ALL: [TotalBorate; 3] = [
        TotalBorate::Uppstrom1974,
        TotalBorate::LeeEtAl2010,
        TotalBorate::KulinskiEtAl2018,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TotalBorate::Uppstrom1974 => "Uppström (1974)",
            TotalBorate::LeeEtAl2010 => "Lee et al. (2010)",
            TotalBorate::KulinskiEtAl2018 => "Kuliński et al. (2018)",
        }
    }

    /// 솔버의 `opt_total_borate` 코드.
    pub fn code(self) -> u8 {
        match self {
            TotalBorate::Uppstrom1974 => 1,
            TotalBorate::LeeEtAl2010 => 2,
            TotalBorate::KulinskiEtAl2018 => 3,
        }
    }
}

impl Default for TotalBorate {
    fn default() -> Self {
        TotalBorate::Uppstrom1974
    }
}

/// 불화수소(HF) 평형상수 파라미터화.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KFluoride {
    DicksonRiley1979,
    PerezFraga1987,
}

impl KFluoride {
    pub const ALL: [KFluoride; 2] = [KFluoride::DicksonRiley1979, KFluoride::PerezFraga1987];

    pub fn label(self) -> &'static str {
        match self {
            KFluoride::DicksonRiley1979 => "Dickson & Riley (1979)",
            KFluoride::PerezFraga1987 => "Perez & Fraga (1987)",
        }
    }

    /// 솔버의 `opt_k_fluoride` 코드.
    pub fn code(self) -> u8 {
        match self {
            KFluoride::DicksonRiley1979 => 1,
            KFluoride::PerezFraga1987 => 2,
        }
    }
}

impl Default for KFluoride {
    fn default() -> Self {
        KFluoride::DicksonRiley1979
    }
}

/// 네 가지 상수 세트 선택. 기본값이 항상 있으므로 별도 검증이 필요 없다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantSetSelection {
    pub k_carbonic: KCarbonic,
    pub k_bisulfate: KBisulfate,
    pub total_borate: TotalBorate,
    pub k_fluoride: KFluoride,
}
