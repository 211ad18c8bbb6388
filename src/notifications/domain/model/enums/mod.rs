pub mod notification_template_key;
