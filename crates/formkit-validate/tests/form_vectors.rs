//! # Form Validation Vectors
//!
//! End-to-end checks against the public API with values as they arrive
//! from a registration form: known-good identifiers, the documented
//! calendar edge cases, and a JSON payload evaluated field by field.

use formkit_validate::{
    evaluate, is_date_greater_than, is_valid_cnpj, is_valid_cpf, is_valid_date, is_valid_tax_id,
    Check, Cnpj, Cpf, FormDate, TaxId, ValidationError,
};
use serde::Deserialize;
use serde_json::json;

const VALID_CPFS: &[&str] = &["11144477735", "52998224725", "39053344705"];
const VALID_CNPJS: &[&str] = &["11222333000181", "11444777000161", "45723174000110"];

#[test]
fn known_identifiers_validate() {
    for cpf in VALID_CPFS {
        assert!(is_valid_cpf(cpf), "{cpf}");
        assert!(is_valid_tax_id(cpf), "{cpf}");
        assert!(!is_valid_cnpj(cpf), "{cpf}");
    }
    for cnpj in VALID_CNPJS {
        assert!(is_valid_cnpj(cnpj), "{cnpj}");
        assert!(is_valid_tax_id(cnpj), "{cnpj}");
        assert!(!is_valid_cpf(cnpj), "{cnpj}");
    }
}

#[test]
fn degenerate_sequences_never_validate() {
    for d in '0'..='9' {
        let cpf: String = std::iter::repeat(d).take(11).collect();
        let cnpj: String = std::iter::repeat(d).take(14).collect();
        assert!(!is_valid_cpf(&cpf));
        assert!(!is_valid_cnpj(&cnpj));
        assert!(!is_valid_tax_id(&cpf));
        assert!(!is_valid_tax_id(&cnpj));
    }
}

#[test]
fn documented_date_cases() {
    assert!(is_valid_date("29/02/2012"));
    assert!(!is_valid_date("29/02/2013"));
    assert!(!is_valid_date("31/04/2015"));
    assert!(!is_valid_date("15/13/2020"));

    assert!(is_date_greater_than("01/04/2015", "30/03/2015"));
    assert!(!is_date_greater_than("30/03/2015", "01/04/2015"));
    assert!(!is_date_greater_than("30/03/2015", "30/03/2015"));
}

#[derive(Debug, Deserialize)]
struct Registration {
    name: String,
    birth_date: FormDate,
    taxpayer: TaxId,
}

#[test]
fn typed_form_deserializes_and_validates() {
    let form: Registration = serde_json::from_value(json!({
        "name": "Maria",
        "birth_date": "05/07/1985",
        "taxpayer": "52998224725",
    }))
    .unwrap();
    assert_eq!(form.name, "Maria");
    assert_eq!(form.birth_date.year(), 1985);
    assert_eq!(form.taxpayer.kind(), "CPF");
}

#[test]
fn typed_form_rejects_bad_identifier() {
    let result: Result<Registration, _> = serde_json::from_value(json!({
        "name": "Maria",
        "birth_date": "05/07/1985",
        "taxpayer": "52998224726",
    }));
    assert!(result.is_err());
}

#[test]
fn untyped_payload_field_by_field() {
    let payload = json!({
        "cpf": "11144477735",
        "cnpj": 11222333000181u64,
        "start": "01/04/2015",
    });

    assert_eq!(evaluate(Check::Cpf, &[payload["cpf"].clone()]), Ok(true));
    assert!(matches!(
        evaluate(Check::Cnpj, &[payload["cnpj"].clone()]),
        Err(ValidationError::WrongType { .. })
    ));
    assert_eq!(
        evaluate(
            Check::DateGreaterThan,
            &[payload["start"].clone(), payload["end"].clone()]
        ),
        Err(ValidationError::MissingArgument { position: 1 })
    );
}

#[test]
fn newtypes_normalize_punctuation() {
    let cpf = Cpf::new("390.533.447-05").unwrap();
    assert_eq!(cpf.as_str(), "39053344705");
    let cnpj = Cnpj::new("45.723.174/0001-10").unwrap();
    assert_eq!(cnpj.as_str(), "45723174000110");
}
