pub mod approval_record;
