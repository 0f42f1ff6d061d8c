use serde_json::{json, Value};

/// Current BIOS settings, including a pending `@Redfish.Settings` block
/// that points at the pending-settings resource.
pub fn current_settings() -> Value {
    json!({
        "@odata.type": "#Bios.v1_2_0.Bios",
        "Id": "Bios",
        "Name": "BIOS Configuration Current Settings",
        "AttributeRegistry": "BiosAttributeRegistryP89.v1_0_0",
        "Attributes": {
            "AdminPhone": "",
            "BootMode": "Uefi",
            "EmbeddedSata": "Raid",
            "NicBoot1": "NetworkBoot",
            "NicBoot2": "Disabled",
            "PowerProfile": "MaxPerf",
            "ProcCoreDisable": 0,
            "ProcHyperthreading": "Enabled",
            "ProcTurboMode": "Enabled",
            "UsbControl": "UsbEnabled"
        },
        "ResetBiosToDefaultsPending": true,
        "@Redfish.Settings": {
            "@odata.type": "#Settings.v1_3_5.Settings",
            "ETag": "9234ac83b9700123cc32",
            "Messages": [
                {
                    "MessageId": "Base.1.0.SettingsFailed",
                    "RelatedProperties": ["#/Attributes/ProcTurboMode"]
                }
            ],
            "SettingsObject": {
                "@odata.id": "/redfish/v1/Systems/437XR1138R2/Bios/Settings"
            },
            "Time": "2016-03-07T14:44.30-05:00"
        },
        "Actions": {
            "#Bios.ResetBios": {
                "target": "/redfish/v1/Systems/437XR1138R2/Bios/Actions/Bios.ResetBios"
            },
            "#Bios.ChangePassword": {
                "target": "/redfish/v1/Systems/437XR1138R2/Bios/Actions/Bios.ChangePassword"
            }
        },
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Bios"
    })
}

pub fn pending_settings() -> Value {
    json!({
        "@odata.type": "#Bios.v1_2_0.Bios",
        "Id": "Settings",
        "Name": "BIOS Configuration Pending Settings",
        "AttributeRegistry": "BiosAttributeRegistryP89.v1_0_0",
        "Attributes": {
            "AdminPhone": "(404) 555-1212",
            "BootMode": "Uefi",
            "EmbeddedSata": "Ahci",
            "NicBoot1": "NetworkBoot",
            "NicBoot2": "NetworkBoot",
            "PowerProfile": "MaxPerf",
            "ProcCoreDisable": 0,
            "ProcHyperthreading": "Enabled",
            "ProcTurboMode": "Disabled",
            "UsbControl": "UsbEnabled"
        },
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Bios/Settings"
    })
}
