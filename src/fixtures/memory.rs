use serde_json::{json, Value};

pub fn collection() -> Value {
    json!({
        "@odata.type": "#MemoryCollection.MemoryCollection",
        "Name": "Memory Module Collection",
        "Members@odata.count": 4,
        "Members": [
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Memory/DIMM1"},
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Memory/DIMM2"},
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Memory/DIMM3"},
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Memory/DIMM4"}
        ],
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Memory"
    })
}

pub fn dimm1() -> Value {
    populated_dimm(1, 1, 1)
}

pub fn dimm2() -> Value {
    populated_dimm(2, 1, 1)
}

pub fn dimm3() -> Value {
    populated_dimm(3, 2, 2)
}

/// DIMM4 is an empty slot; only location and an Absent status are modeled.
pub fn dimm4() -> Value {
    json!({
        "@odata.type": "#Memory.v1_16_0.Memory",
        "Id": "DIMM4",
        "Name": "DIMM Slot 4",
        "MemoryLocation": {
            "Socket": 2,
            "MemoryController": 2,
            "Channel": 1,
            "Slot": 4
        },
        "Status": {"State": "Absent"},
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Memory/DIMM4"
    })
}

/// Environment metrics for a populated DIMM. Every slot reports the
/// DIMM1Temp sensor at 44C, as in the upstream mockup data.
pub fn environment_metrics(dimm: &str) -> Value {
    json!({
        "@odata.type": "#EnvironmentMetrics.v1_3_0.EnvironmentMetrics",
        "Id": "EnvironmentMetrics",
        "Name": "Memory Environment Metrics",
        "TemperatureCelsius": {
            "DataSourceUri": "/redfish/v1/Chassis/1U/Sensors/DIMM1Temp",
            "Reading": 44
        },
        "Oem": {},
        "@odata.id": format!("/redfish/v1/Systems/437XR1138R2/Memory/{dimm}/EnvironmentMetrics")
    })
}

// DIMM1-3 share everything but their location.
fn populated_dimm(slot: u32, socket: u32, controller: u32) -> Value {
    let base = format!("/redfish/v1/Systems/437XR1138R2/Memory/DIMM{slot}");
    json!({
        "@odata.type": "#Memory.v1_16_0.Memory",
        "Id": format!("DIMM{slot}"),
        "Name": format!("DIMM Slot {slot}"),
        "RankCount": 2,
        "MaxTDPMilliWatts": [12000],
        "CapacityMiB": 32768,
        "DataWidthBits": 64,
        "BusWidthBits": 72,
        "ErrorCorrection": "MultiBitECC",
        "MemoryLocation": {
            "Socket": socket,
            "MemoryController": controller,
            "Channel": 1,
            "Slot": slot
        },
        "MemoryType": "DRAM",
        "MemoryDeviceType": "DDR4",
        "BaseModuleType": "RDIMM",
        "MemoryMedia": ["DRAM"],
        "Status": {"State": "Enabled", "Health": "OK"},
        "EnvironmentMetrics": {
            "@odata.id": format!("{base}/EnvironmentMetrics")
        },
        "@odata.id": base
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_dimms_differ_only_in_location() {
        let d1 = dimm1();
        let d2 = dimm2();
        assert_eq!(d1["CapacityMiB"], d2["CapacityMiB"]);
        assert_eq!(d1["MemoryLocation"]["Slot"], 1);
        assert_eq!(d2["MemoryLocation"]["Slot"], 2);
        assert_eq!(dimm3()["MemoryLocation"]["Socket"], 2);
    }

    #[test]
    fn test_environment_metrics_links_to_its_dimm() {
        let metrics = environment_metrics("DIMM3");
        assert_eq!(
            metrics["@odata.id"],
            "/redfish/v1/Systems/437XR1138R2/Memory/DIMM3/EnvironmentMetrics"
        );
        // Sensor URI is DIMM1Temp for every slot in the source data
        assert_eq!(
            metrics["TemperatureCelsius"]["DataSourceUri"],
            "/redfish/v1/Chassis/1U/Sensors/DIMM1Temp"
        );
    }

    #[test]
    fn test_dimm4_is_absent() {
        let d4 = dimm4();
        assert_eq!(d4["Status"]["State"], "Absent");
        assert!(d4.get("EnvironmentMetrics").is_none());
    }
}
