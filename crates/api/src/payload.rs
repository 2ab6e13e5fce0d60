//! Request body parsing for actors and movies.
//!
//! Bodies arrive as loosely-typed JSON so that each field can be run through
//! its validator and rejected with a precise message. Unknown keys
//! (including `id`) are ignored.

use agency_core::validation::{
    validate_age, validate_date, validate_gender, validate_text, Gender, ValidationError,
    DATE_FORMAT,
};
use agency_db::models::actor::{CreateActor, UpdateActor};
use agency_db::models::movie::{CreateMovie, UpdateMovie};
use chrono::NaiveDate;
use serde_json::{Map, Value};

type Fields = Map<String, Value>;

fn fields(body: &Value) -> Result<&Fields, ValidationError> {
    body.as_object().ok_or(ValidationError::NotAnObject)
}

fn required<'a>(fields: &'a Fields, name: &'static str) -> Result<&'a Value, ValidationError> {
    fields.get(name).ok_or(ValidationError::MissingField(name))
}

fn gender(raw: &Value) -> Result<Gender, ValidationError> {
    raw.as_str()
        .ok_or(ValidationError::InvalidGender)
        .and_then(validate_gender)
}

fn release_date(raw: &Value) -> Result<NaiveDate, ValidationError> {
    match raw.as_str() {
        Some(s) => validate_date(s, DATE_FORMAT),
        None => Err(ValidationError::InvalidFormat {
            format: DATE_FORMAT.to_string(),
        }),
    }
}

/// Body of `POST /actors`. All of `name`, `age` and `gender` are required.
pub fn new_actor(body: &Value) -> Result<CreateActor, ValidationError> {
    let fields = fields(body)?;
    let name = required(fields, "name")?;
    let age = required(fields, "age")?;
    let raw_gender = required(fields, "gender")?;

    Ok(CreateActor {
        name: validate_text("name", name)?,
        age: validate_age(age)?,
        gender: gender(raw_gender)?,
    })
}

/// Body of `PATCH /actors/{id}`. Only supplied fields are validated.
pub fn actor_changes(body: &Value) -> Result<UpdateActor, ValidationError> {
    let fields = fields(body)?;

    Ok(UpdateActor {
        name: fields
            .get("name")
            .map(|v| validate_text("name", v))
            .transpose()?,
        age: fields.get("age").map(validate_age).transpose()?,
        gender: fields.get("gender").map(gender).transpose()?,
    })
}

/// Body of `POST /movies`. Both `title` and `release_date` are required.
pub fn new_movie(body: &Value) -> Result<CreateMovie, ValidationError> {
    let fields = fields(body)?;
    let title = required(fields, "title")?;
    let date = required(fields, "release_date")?;

    Ok(CreateMovie {
        title: validate_text("title", title)?,
        release_date: release_date(date)?,
    })
}

/// Body of `PATCH /movies/{id}`.
pub fn movie_changes(body: &Value) -> Result<UpdateMovie, ValidationError> {
    let fields = fields(body)?;

    Ok(UpdateMovie {
        title: fields
            .get("title")
            .map(|v| validate_text("title", v))
            .transpose()?,
        release_date: fields.get("release_date").map(release_date).transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn new_actor_normalises_fields() {
        let actor = new_actor(&json!({"name": "Actor1", "age": "30", "gender": "f"})).unwrap();
        assert_eq!(actor.name, "Actor1");
        assert_eq!(actor.age, 30);
        assert_eq!(actor.gender, Gender::Female);
    }

    #[test]
    fn new_actor_reports_first_missing_field() {
        assert_matches!(
            new_actor(&json!({"age": 30, "gender": "M"})),
            Err(ValidationError::MissingField("name"))
        );
        assert_matches!(
            new_actor(&json!({"name": "X", "gender": "M"})),
            Err(ValidationError::MissingField("age"))
        );
        assert_matches!(
            new_actor(&json!({"name": "X", "age": 3})),
            Err(ValidationError::MissingField("gender"))
        );
    }

    #[test]
    fn presence_is_checked_before_values() {
        assert_matches!(
            new_actor(&json!({"name": "X", "age": "eighty"})),
            Err(ValidationError::MissingField("gender"))
        );
    }

    #[test]
    fn new_actor_rejects_bad_values() {
        assert_matches!(
            new_actor(&json!({"name": "X", "age": "eighty", "gender": "M"})),
            Err(ValidationError::NotAnInteger)
        );
        assert_matches!(
            new_actor(&json!({"name": "X", "age": -100, "gender": "M"})),
            Err(ValidationError::NegativeAge)
        );
        assert_matches!(
            new_actor(&json!({"name": "X", "age": 80, "gender": "MALE"})),
            Err(ValidationError::InvalidGender)
        );
        assert_matches!(
            new_actor(&json!({"name": "X", "age": 80, "gender": 1})),
            Err(ValidationError::InvalidGender)
        );
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in [json!([]), json!("actor"), json!(null), json!(3)] {
            assert_matches!(new_actor(&body), Err(ValidationError::NotAnObject));
            assert_matches!(movie_changes(&body), Err(ValidationError::NotAnObject));
        }
    }

    #[test]
    fn actor_changes_only_touch_supplied_fields() {
        let changes = actor_changes(&json!({"age": 41})).unwrap();
        assert_eq!(changes.age, Some(41));
        assert!(changes.name.is_none());
        assert!(changes.gender.is_none());

        let empty = actor_changes(&json!({})).unwrap();
        assert!(empty.name.is_none() && empty.age.is_none() && empty.gender.is_none());
    }

    #[test]
    fn actor_changes_revalidate_supplied_fields() {
        assert_matches!(
            actor_changes(&json!({"gender": "x"})),
            Err(ValidationError::InvalidGender)
        );
        assert_matches!(
            actor_changes(&json!({"age": null})),
            Err(ValidationError::NotAnInteger)
        );
        assert_matches!(
            actor_changes(&json!({"name": ""})),
            Err(ValidationError::InvalidText { field: "name" })
        );
    }

    #[test]
    fn id_in_body_is_ignored() {
        let changes = actor_changes(&json!({"id": 99, "name": "Renamed"})).unwrap();
        assert_eq!(changes.name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn new_movie_parses_release_date() {
        let movie = new_movie(&json!({"title": "Movie1", "release_date": "2020-12-12"})).unwrap();
        assert_eq!(movie.title, "Movie1");
        assert_eq!(movie.release_date.to_string(), "2020-12-12");
    }

    #[test]
    fn new_movie_rejects_bad_dates() {
        for date in [json!("20201212"), json!(20201212), json!(null)] {
            assert_matches!(
                new_movie(&json!({"title": "Movie12", "release_date": date})),
                Err(ValidationError::InvalidFormat { .. })
            );
        }
        assert_matches!(
            new_movie(&json!({"title": "Movie12"})),
            Err(ValidationError::MissingField("release_date"))
        );
    }

    #[test]
    fn movie_changes_validate_date_when_present() {
        assert_matches!(
            movie_changes(&json!({"release_date": "2000/09/22"})),
            Err(ValidationError::InvalidFormat { .. })
        );
        let changes = movie_changes(&json!({"title": "Y"})).unwrap();
        assert_eq!(changes.title.as_deref(), Some("Y"));
        assert!(changes.release_date.is_none());
    }
}
