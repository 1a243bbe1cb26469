use cocoa_ranks::http::decode_records;

#[test]
fn test_decode_well_formed_payload() {
    let body = r#"[
        {"name":"iris","location":"Angelina","richness":9,"sweetness":8,"creaminess":9,"speed":6,"temperature":8},
        {"name":"omar","location":"Starbucks","richness":5,"sweetness":7,"creaminess":4,"speed":9,"temperature":6}
    ]"#;

    let records = decode_records(body).expect("payload should decode");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "iris");
    assert_eq!(records[0].location, "Angelina");
    assert_eq!(records[0].richness, 9);
    assert_eq!(records[1].overall_score(), 6.2);

    // Identity is assigned locally at decode time
    assert_ne!(records[0].id, records[1].id);
}

#[test]
fn test_decode_empty_array() {
    let records = decode_records("[]").expect("empty array should decode");
    assert!(records.is_empty());
}

#[test]
fn test_missing_field_fails_whole_payload() {
    // Second element has no "speed"; there is no partial-record recovery
    let body = r#"[
        {"name":"iris","location":"Angelina","richness":9,"sweetness":8,"creaminess":9,"speed":6,"temperature":8},
        {"name":"omar","location":"Starbucks","richness":5,"sweetness":7,"creaminess":4,"temperature":6}
    ]"#;

    assert!(decode_records(body).is_err());
}

#[test]
fn test_wrong_field_type_fails() {
    let body = r#"[{"name":"iris","location":"Angelina","richness":"very","sweetness":8,"creaminess":9,"speed":6,"temperature":8}]"#;
    assert!(decode_records(body).is_err());
}

#[test]
fn test_non_array_payload_fails() {
    assert!(decode_records(r#"{"error":"quota exceeded"}"#).is_err());
    assert!(decode_records("<!DOCTYPE html>").is_err());
}

#[test]
fn test_locally_assigned_id_is_not_serialized() {
    let body = r#"[{"name":"iris","location":"Angelina","richness":9,"sweetness":8,"creaminess":9,"speed":6,"temperature":8}]"#;
    let records = decode_records(body).expect("payload should decode");

    let json = serde_json::to_value(&records[0]).expect("record should serialize");
    let object = json.as_object().expect("record serializes to an object");

    // Exactly the seven wire keys; the local id never goes over the wire
    assert_eq!(object.len(), 7);
    assert!(object.get("id").is_none());
    assert_eq!(object["location"], "Angelina");
}
