//! Record assembly for the four shapes.
//!
//! Assembly is total over [`DataType`]; unknown names are rejected when the
//! string is parsed, never here.

use crate::catalogue::OrderExtra;
use crate::data_type::DataType;
use crate::generator::FieldGenerator;
use crate::options::GenerationOptions;
use crate::record::{Record, fields};

/// Build one record of the given shape.
///
/// # Example
///
/// ```
/// use coffee_data::{DataType, FieldGenerator, GenerationOptions, assemble};
///
/// let options = GenerationOptions::default().with_seed(7);
/// let mut generator = FieldGenerator::new(&options);
/// let record = assemble(DataType::Login, &mut generator, &options);
///
/// assert_eq!(record.field_names().collect::<Vec<_>>(), ["benutzername", "passwort"]);
/// ```
pub fn assemble(
    data_type: DataType,
    generator: &mut FieldGenerator,
    options: &GenerationOptions,
) -> Record {
    match data_type {
        DataType::Registration => registration(generator),
        DataType::Login => login(generator),
        DataType::Profile => profile(generator, options),
        DataType::Order => order(generator, options),
    }
}

fn registration(generator: &mut FieldGenerator) -> Record {
    let username = generator.username();
    let password = generator.password();
    Record::new()
        .with_field(fields::BENUTZERNAME, username)
        .with_field(fields::PASSWORT, password.clone())
        .with_field(fields::PASSWORT_WIEDERHOLEN, password)
        .with_field(fields::AGB_AKZEPTIEREN, generator.flag())
}

fn login(generator: &mut FieldGenerator) -> Record {
    Record::new()
        .with_field(fields::BENUTZERNAME, generator.username())
        .with_field(fields::PASSWORT, generator.password())
}

fn profile(generator: &mut FieldGenerator, options: &GenerationOptions) -> Record {
    push_person(Record::new(), generator, options).with_field(fields::EMAIL, generator.email())
}

fn order(generator: &mut FieldGenerator, options: &GenerationOptions) -> Record {
    let product = generator.product();
    let quantity = generator.quantity();
    let price = generator.unit_price().times(quantity);
    let mut record = Record::new()
        .with_field(fields::PRODUKT, product)
        .with_field(fields::MENGE, i64::from(quantity))
        .with_field(fields::PREIS, price.to_string());

    if options.order.with_customer {
        record = record
            .with_field(fields::BENUTZERNAME, generator.username())
            .with_field(fields::PASSWORT, generator.password())
            .with_field(fields::EMAIL, generator.email());
        record = push_person(record, generator, options);
    }

    match options.order.extra {
        Some(OrderExtra::Rabatt) => record.with_field(fields::RABATT, generator.discount()),
        Some(OrderExtra::Versandkosten) => record.with_field(
            fields::VERSANDKOSTEN,
            generator.shipping_cost().to_string(),
        ),
        Some(OrderExtra::Geschenk) => record.with_field(fields::GESCHENK, generator.flag()),
        None => record,
    }
}

/// Append the personal fields shared by profiles and order customers, from
/// `nachname` through `geschlecht`.
///
/// The gender is drawn first so the first name can be conditioned on it.
fn push_person(
    mut record: Record,
    generator: &mut FieldGenerator,
    options: &GenerationOptions,
) -> Record {
    let gender = generator.gender();
    let (city, postal_code) = generator.city_with_postal_code(options.city);

    record.insert(fields::NACHNAME, generator.last_name());
    record.insert(fields::VORNAME, generator.first_name(gender));
    record.insert(fields::STRASSE, generator.street());
    record.insert(fields::STADT, city);
    record.insert(fields::POSTLEITZAHL, postal_code);
    record.insert(fields::LAND, generator.country(options.country).label());
    record.insert(fields::TELEFONNUMMER, generator.phone_number());
    record.insert(fields::ALTER, generator.age());
    record.insert(fields::GESCHLECHT, gender.label());
    record
}
