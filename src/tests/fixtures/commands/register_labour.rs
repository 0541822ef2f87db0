// Shared test fixture for the RegisterLabour command.

use crate::modules::labour_entries::use_cases::register_labour::command::RegisterLabour;
use chrono::NaiveDate;

pub struct RegisterLabourBuilder {
    inner: RegisterLabour,
}

impl Default for RegisterLabourBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterLabourBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterLabour {
                labour_name: "Ravi".to_string(),
                salary_type: "daily".to_string(),
                rate_per_day: Some(650.0),
                labour_category: "mason".to_string(),
                aadhar_number: None,
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                additional_details: None,
            },
        }
    }

    pub fn labour_name(mut self, v: impl Into<String>) -> Self {
        self.inner.labour_name = v.into();
        self
    }

    pub fn rate_per_day(mut self, v: Option<f64>) -> Self {
        self.inner.rate_per_day = v;
        self
    }

    pub fn labour_category(mut self, v: impl Into<String>) -> Self {
        self.inner.labour_category = v.into();
        self
    }

    pub fn start_date(mut self, v: Option<NaiveDate>) -> Self {
        self.inner.start_date = v;
        self
    }

    pub fn aadhar_number(mut self, v: Option<&str>) -> Self {
        self.inner.aadhar_number = v.map(str::to_string);
        self
    }

    pub fn additional_details(mut self, v: Option<&str>) -> Self {
        self.inner.additional_details = v.map(str::to_string);
        self
    }

    pub fn build(self) -> RegisterLabour {
        self.inner
    }
}
