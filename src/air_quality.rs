use std::fmt;
use std::fmt::Formatter;

/// Air quality grades, worst of PM10 and PM2.5 decides
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AirGrade {
    Good,
    Moderate,
    Bad,
    VeryBad,
}

impl AirGrade {
    /// Grades particulate concentrations (µg/m³)
    ///
    /// # Arguments
    ///
    /// * 'pm10' - PM10 concentration
    /// * 'pm2_5' - PM2.5 concentration
    pub fn from_particulates(pm10: f64, pm2_5: f64) -> AirGrade {
        if pm10 > 150.0 || pm2_5 > 75.0 {
            AirGrade::VeryBad
        } else if pm10 > 80.0 || pm2_5 > 35.0 {
            AirGrade::Bad
        } else if pm10 > 30.0 || pm2_5 > 15.0 {
            AirGrade::Moderate
        } else {
            AirGrade::Good
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for AirGrade {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AirGrade::Good     => write!(f, "Good"),
            AirGrade::Moderate => write!(f, "Moderate"),
            AirGrade::Bad      => write!(f, "Bad"),
            AirGrade::VeryBad  => write!(f, "Very bad"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AirQuality {
    pub pm10: f64,
    pub pm2_5: f64,
    pub grade: AirGrade,
}

impl AirQuality {
    pub fn new(pm10: f64, pm2_5: f64) -> AirQuality {
        AirQuality { pm10, pm2_5, grade: AirGrade::from_particulates(pm10, pm2_5) }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} (PM10 {:.0}, PM2.5 {:.0})", self.grade, self.pm10, self.pm2_5)
    }
}
