//! The entity records held by the canonical dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee row. `mgr` references another employee's `emp_no`; the root
/// of the reporting chain has no manager. A dangling `mgr` is permitted and
/// simply never matches in a self-join.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_no: i32,
    pub ename: String,
    pub job: String,
    pub mgr: Option<i32>,
    pub sal: f64,
    pub comm: Option<f64>,
    pub dept_no: i32,
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Salary plus commission, treating a missing commission as zero.
    pub fn total_income(&self) -> f64 {
        self.sal + self.comm.unwrap_or(0.0)
    }
}

/// A department row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub dept_no: i32,
    pub dname: String,
    pub loc: String,
}

/// A salary grade band. Bands are inclusive on both ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryGrade {
    pub grade: i32,
    pub losal: f64,
    pub hisal: f64,
}

impl SalaryGrade {
    /// Returns true if the salary falls within this band.
    pub fn contains(&self, sal: f64) -> bool {
        self.losal <= sal && sal <= self.hisal
    }
}
