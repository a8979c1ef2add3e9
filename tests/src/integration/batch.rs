//! Regulated-batch variant: flat genesis plus unconditional appends, no
//! lifecycle machine.

#[cfg(test)]
mod tests {
    use crate::integration::{ctx, service};
    use custody_contract::prelude::*;

    fn batch(id: &str) -> BatchRecord {
        BatchRecord {
            id: id.to_string(),
            temp_sensor_id: "TS1".to_string(),
            manufacturing_date: 1_640_000_000,
            expiry_date: 1_700_000_000,
            item_count: "5000".to_string(),
            added_at: 1_641_000_000,
            owner: "PharmaCo".to_string(),
            description: "lot 42".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let svc = service();
        svc.create_batch(&ctx("manu-1", Role::Manufacturer), batch("B1")).unwrap();

        let stored = svc.get_batch_by_id("B1").unwrap();
        assert_eq!(stored.item_count, "5000");
        assert_eq!(stored.expiry_date, 1_700_000_000);
        assert_eq!(stored.doc_type, "batch");
        assert!(stored.telemetry.is_empty());
    }

    #[test]
    fn test_update_appends_and_returns_tx_id() {
        let svc = service();
        svc.create_batch(&ctx("manu-1", Role::Manufacturer), batch("B1")).unwrap();

        let carrier = MemoryContext::with_tx_id(
            "tx-update-1",
            CallerIdentity::new("dist-1", Role::Distributor),
        );
        let reading = TelemetryReading {
            temperature: "4.2".to_string(),
            ..Default::default()
        };
        let tx_id = svc.update_batch(&carrier, "B1", reading).unwrap();
        assert_eq!(tx_id, "tx-update-1");

        let stored = svc.get_batch_by_id("B1").unwrap();
        assert_eq!(stored.telemetry.len(), 1);
        assert_eq!(stored.telemetry[0].temperature, "4.2");
    }

    #[test]
    fn test_updates_accumulate_for_any_caller() {
        // No staged machine: appends are unconditional for every role.
        let svc = service();
        svc.create_batch(&ctx("manu-1", Role::Manufacturer), batch("B1")).unwrap();

        for role in [Role::Farmer, Role::Manufacturer, Role::Distributor, Role::Regulator] {
            svc.update_batch(
                &ctx("caller", role),
                "B1",
                TelemetryReading {
                    temperature: "3.9".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
        }
        assert_eq!(svc.get_batch_by_id("B1").unwrap().telemetry.len(), 4);
    }

    #[test]
    fn test_get_missing_batch_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.get_batch_by_id("nope").unwrap_err(),
            ContractError::NotFound { .. }
        ));
    }

    #[test]
    fn test_update_missing_batch_is_not_found() {
        let svc = service();
        let err = svc
            .update_batch(
                &ctx("d1", Role::Distributor),
                "nope",
                TelemetryReading::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ContractError::NotFound { .. }));
    }

    #[test]
    fn test_create_duplicate_batch_rejected() {
        let svc = service();
        let manu = ctx("manu-1", Role::Manufacturer);
        svc.create_batch(&manu, batch("B1")).unwrap();
        let err = svc.create_batch(&manu, batch("B1")).unwrap_err();
        assert!(matches!(err, ContractError::AlreadyExists { .. }));
    }
}
