use super::{fields, setup_test_db};
use crate::errors::ModelError;
use crate::truck::{self, Fields};
use anyhow::Result;

/// Test truck CRUD operations
#[tokio::test]
async fn test_truck_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create
    let created = truck::create(
        &db,
        Fields {
            truck_number: "TRK-001".into(),
            driver_name: "Alice".into(),
            driver_contact: Some("+1-555-0100".into()),
            truck_type: Some("flatbed".into()),
            capacity: Some(20000),
        },
    )
    .await?;
    assert!(created.id > 0);
    assert_eq!(created.truck_number, "TRK-001");
    assert_eq!(created.capacity, Some(20000));

    // Read
    let found = truck::find_by_id(&db, created.id).await?.unwrap();
    assert_eq!(found, created);

    let by_number = truck::find_by_truck_number(&db, "TRK-001").await?.unwrap();
    assert_eq!(by_number.id, created.id);

    // Replace
    let updated = truck::replace(&db, created.id, Fields { capacity: Some(22000), ..fields("TRK-002", "Alice") }).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.truck_number, "TRK-002");
    assert_eq!(updated.capacity, Some(22000));
    assert_eq!(updated.driver_contact, None);
    assert!(truck::find_by_truck_number(&db, "TRK-001").await?.is_none());

    // Delete
    assert!(truck::delete(&db, created.id).await?);
    assert!(truck::find_by_id(&db, created.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_missing_rows_are_not_errors() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(truck::find_by_id(&db, 42).await?.is_none());
    assert!(truck::find_by_truck_number(&db, "NOPE").await?.is_none());
    assert!(!truck::delete(&db, 42).await?);
    assert!(truck::list_all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_replace_missing_row() -> Result<()> {
    let db = setup_test_db().await?;
    let err = truck::replace(&db, 7, fields("TRK-007", "Bond")).await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_list_all_in_id_order() -> Result<()> {
    let db = setup_test_db().await?;
    for i in 0..5 {
        truck::create(&db, fields(&format!("TRK-{i:03}"), "Driver")).await?;
    }
    let all = truck::list_all(&db).await?;
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    Ok(())
}

#[tokio::test]
async fn test_validation_rejects_blank_required_fields() -> Result<()> {
    let db = setup_test_db().await?;
    let err = truck::create(&db, fields("   ", "Alice")).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    let err = truck::create(&db, fields("TRK-001", "")).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    let err = truck::create(&db, Fields { capacity: Some(-1), ..fields("TRK-001", "Alice") }).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert!(truck::list_all(&db).await?.is_empty());
    Ok(())
}

#[test]
fn test_length_limits() {
    assert!(truck::validate_truck_number(&"x".repeat(truck::TRUCK_NUMBER_MAX_LEN)).is_ok());
    assert!(truck::validate_truck_number(&"x".repeat(truck::TRUCK_NUMBER_MAX_LEN + 1)).is_err());
    assert!(truck::validate_driver_name(&"x".repeat(truck::DRIVER_NAME_MAX_LEN + 1)).is_err());
    let long_contact = Fields { driver_contact: Some("9".repeat(65)), ..fields("TRK-1", "A") };
    assert!(truck::validate(&long_contact).is_err());
}

#[test]
fn test_model_serializes_column_names() {
    let m = truck::Model {
        id: 1,
        truck_number: "TRK-001".into(),
        driver_name: "Alice".into(),
        driver_contact: None,
        truck_type: None,
        capacity: Some(20000),
    };
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["truck_number"], "TRK-001");
    assert_eq!(json["capacity"], 20000);
    assert!(json["driver_contact"].is_null());
}
