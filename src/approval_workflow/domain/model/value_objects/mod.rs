pub mod decision_remarks;
