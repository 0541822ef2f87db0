// Command data type for registering a labourer.
//
// Carries the raw form values; the decider trims and validates them.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterLabour {
    pub labour_name: String,
    pub salary_type: String,
    pub rate_per_day: Option<f64>,
    pub labour_category: String,
    pub aadhar_number: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub additional_details: Option<String>,
}
