//! Telemetry appends: strictly additive, order preserving, status blind.

#[cfg(test)]
mod tests {
    use crate::integration::{ctx, product, seed_product, service};
    use custody_contract::prelude::*;

    fn reading(time: &str, temperature: &str) -> TelemetryReading {
        TelemetryReading {
            sensor_id: "S1".to_string(),
            time: time.to_string(),
            temperature: temperature.to_string(),
            ..Default::default()
        }
    }

    /// Two appends land in exactly that order.
    #[test]
    fn test_appends_preserve_insertion_order() {
        let svc = service();
        svc.genesis(&ctx("farmer-1", Role::Farmer), "P1", "S1").unwrap();

        let sensor = ctx("sensor-gw", Role::Farmer);
        svc.append_telemetry(&sensor, "P1", reading("t1", "21.0")).unwrap();
        svc.append_telemetry(&sensor, "P1", reading("t2", "22.0")).unwrap();

        let trail = product(&svc, "P1").telemetry;
        assert_eq!(trail.len(), 2);
        assert_eq!((trail[0].time.as_str(), trail[0].temperature.as_str()), ("t1", "21.0"));
        assert_eq!((trail[1].time.as_str(), trail[1].temperature.as_str()), ("t2", "22.0"));
    }

    #[test]
    fn test_append_is_strictly_additive() {
        let svc = service();
        svc.genesis(&ctx("farmer-1", Role::Farmer), "P1", "S1").unwrap();
        let sensor = ctx("sensor-gw", Role::Farmer);

        for n in 0..5u32 {
            let before = product(&svc, "P1").telemetry;
            svc.append_telemetry(&sensor, "P1", reading(&format!("t{n}"), "20.0"))
                .unwrap();
            let after = product(&svc, "P1").telemetry;
            assert_eq!(after.len(), before.len() + 1);
            assert_eq!(&after[..before.len()], &before[..], "prior readings unchanged");
        }
    }

    #[test]
    fn test_append_never_touches_status() {
        for status in [Status::Initiated, Status::ManufactureProcess, Status::Error] {
            let svc = service();
            seed_product(&svc, "P1", status);
            svc.append_telemetry(&ctx("gw", Role::Farmer), "P1", reading("t1", "19.5"))
                .unwrap();
            assert_eq!(product(&svc, "P1").status, status);
        }
    }

    #[test]
    fn test_duplicate_readings_are_kept() {
        // List semantics: no dedup, no plausibility checks.
        let svc = service();
        svc.genesis(&ctx("farmer-1", Role::Farmer), "P1", "S1").unwrap();
        let sensor = ctx("gw", Role::Farmer);
        svc.append_telemetry(&sensor, "P1", reading("t1", "21.0")).unwrap();
        svc.append_telemetry(&sensor, "P1", reading("t1", "21.0")).unwrap();
        assert_eq!(product(&svc, "P1").telemetry.len(), 2);
    }

    #[test]
    fn test_append_before_genesis_fails_without_creating() {
        let svc = service();
        let err = svc
            .append_telemetry(&ctx("gw", Role::Farmer), "ghost", reading("t1", "21.0"))
            .unwrap_err();
        assert!(matches!(err, ContractError::NotFound { .. }));
        assert!(matches!(
            svc.query("ghost").unwrap_err(),
            ContractError::NotFound { .. }
        ));
    }
}
