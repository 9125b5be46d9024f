pub mod url_validator;
