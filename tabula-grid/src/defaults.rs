//! Built-in employee table schema.
//!
//! `employee_schema()` provides the five columns of the employee table
//! (name, position, office, age, salary) with their validation wording,
//! the currency formatting of salary and the office dropdown choices.

use tabula_fields::rules::{
    after, all_of, min_chars, number_at_least, number_between, numeric, one_of, required, Rule,
};
use tabula_fields::{format_currency, strip_currency, FieldSpec, Result, Schema};

/// Office dropdown choices, in display order.
pub const OFFICES: [&str; 6] = [
    "Tokyo",
    "Singapore",
    "London",
    "New York",
    "Edinburgh",
    "San Francisco",
];

/// Column definitions of the employee table.
pub fn employee_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("name", "Name").with_validator(all_of(vec![
            Box::new(required("Employee's name is required!")) as Rule,
            Box::new(min_chars(4, "Employee's name has less than 4 letters!")),
        ])),
        FieldSpec::text("position", "Position")
            .with_validator(required("Employee's position is required!")),
        FieldSpec::choice("office", "Office", OFFICES).with_validator(all_of(vec![
            Box::new(required("Employee's office is required!")) as Rule,
            Box::new(one_of(
                OFFICES,
                "Employee's office must be one of the listed offices!",
            )),
        ])),
        FieldSpec::number("age", "Age").with_validator(all_of(vec![
            Box::new(required("Employee's age is required!")) as Rule,
            Box::new(numeric("Employee's age must be a number!")),
            Box::new(number_between(
                18.0,
                90.0,
                "Employee's age must be from 18 to 90 years old!",
            )),
        ])),
        FieldSpec::number("salary", "Salary")
            .with_view_format(format_currency)
            .with_edit_format(strip_currency)
            .with_validator(after(
                strip_currency,
                all_of(vec![
                    Box::new(required("Employee's salary is required!")) as Rule,
                    Box::new(numeric("Employee's salary must be a number!")),
                    Box::new(number_at_least(1.0, "Employee's salary must be positive!")),
                ]),
            )),
    ]
}

/// The employee table schema.
pub fn employee_schema() -> Result<Schema> {
    employee_fields()
        .into_iter()
        .fold(Schema::builder(), |builder, field| builder.field(field))
        .build()
}
