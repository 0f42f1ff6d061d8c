use serde_json::{json, Value};

/// ServiceRoot document.
///
/// The `ProtocolFeaturesSupported` flags are advertised capability data
/// only; no route honors them.
pub fn service_root() -> Value {
    json!({
        "@odata.type": "#ServiceRoot.v1_14_0.ServiceRoot",
        "Id": "RootService",
        "Name": "Root Service",
        "RedfishVersion": "1.15.0",
        "UUID": "92384634-2938-2342-8820-489239905423",
        "ProtocolFeaturesSupported": {
            "ExpandQuery": {
                "ExpandAll": true,
                "Levels": true,
                "MaxLevels": 6,
                "Links": true,
                "NoLinks": true
            },
            "SelectQuery": false,
            "FilterQuery": false,
            "OnlyMemberQuery": true,
            "ExcerptQuery": true
        },
        "Systems": {"@odata.id": "/redfish/v1/Systems"},
        "Chassis": {"@odata.id": "/redfish/v1/Chassis"},
        "Managers": {"@odata.id": "/redfish/v1/Managers"},
        "Tasks": {"@odata.id": "/redfish/v1/TaskService"},
        "SessionService": {"@odata.id": "/redfish/v1/SessionService"},
        "AccountService": {"@odata.id": "/redfish/v1/AccountService"},
        "EventService": {"@odata.id": "/redfish/v1/EventService"},
        "Registries": {"@odata.id": "/redfish/v1/Registries"},
        "UpdateService": {"@odata.id": "/redfish/v1/UpdateService"},
        "CertificateService": {"@odata.id": "/redfish/v1/CertificateService"},
        "KeyService": {"@odata.id": "/redfish/v1/KeyService"},
        "Links": {
            "Sessions": {"@odata.id": "/redfish/v1/SessionService/Sessions"}
        },
        "ComponentIntegrity": {"@odata.id": "/redfish/v1/ComponentIntegrity"},
        "Oem": {},
        "@odata.id": "/redfish/v1/",
        "@odata.etag": "xxxxxxxxxx"
    })
}

pub fn systems_collection() -> Value {
    json!({
        "@odata.type": "#ComputerSystemCollection.ComputerSystemCollection",
        "Name": "Computer System Collection",
        "Members@odata.count": 1,
        "Members": [
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2"}
        ],
        "@odata.id": "/redfish/v1/Systems"
    })
}

/// Full ComputerSystem document for the single modeled system.
pub fn computer_system() -> Value {
    json!({
        "@odata.type": "#ComputerSystem.v1_19_0.ComputerSystem",
        "Id": "437XR1138R2",
        "Name": "WebFrontEnd483",
        "SystemType": "Physical",
        "AssetTag": "Chicago-45Z-2381",
        "Manufacturer": "Contoso",
        "Model": "3500",
        "SubModel": "RX",
        "SKU": "8675309",
        "SerialNumber": "437XR1138R2",
        "PartNumber": "224071-J23",
        "Description": "Web Front End node",
        "UUID": "38947555-7742-3448-3784-823347823834",
        "HostName": "web483",
        "Status": {
            "State": "Enabled",
            "Health": "OK",
            "HealthRollup": "OK"
        },
        "HostingRoles": ["ApplicationServer"],
        "IndicatorLED": "Off",
        "PowerState": "On",
        "Boot": {
            "BootSourceOverrideEnabled": "Once",
            "BootSourceOverrideTarget": "Pxe",
            "BootSourceOverrideTarget@Redfish.AllowableValues": [
                "None",
                "Pxe",
                "Cd",
                "Usb",
                "Hdd",
                "BiosSetup",
                "Utilities",
                "Diags",
                "SDCard",
                "UefiTarget"
            ],
            "BootSourceOverrideMode": "UEFI",
            "UefiTargetBootSourceOverride": "/0x31/0x33/0x01/0x01"
        },
        "TrustedModules": [
            {
                "FirmwareVersion": "1.13b",
                "InterfaceType": "TPM1_2",
                "Status": {"State": "Enabled", "Health": "OK"}
            }
        ],
        "Oem": {
            "Contoso": {
                "@odata.type": "#Contoso.ComputerSystem",
                "ProductionLocation": {
                    "FacilityName": "PacWest Production Facility",
                    "Country": "USA"
                }
            },
            "Chipwise": {
                "@odata.type": "#Chipwise.ComputerSystem",
                "Style": "Executive"
            }
        },
        "BootProgress": {
            "LastState": "OSRunning",
            "LastStateTime": "2021-03-13T04:14:13+06:00",
            "LastBootTimeSeconds": 676
        },
        "LastResetTime": "2021-03-13T04:02:57+06:00",
        "BiosVersion": "P79 v1.45 (12/06/2017)",
        "ProcessorSummary": {
            "Count": 2,
            "Model": "Multi-Core Intel(R) Xeon(R) processor 7xxx Series",
            "LogicalProcessorCount": 16,
            "CoreCount": 8,
            "Status": {
                "State": "Enabled",
                "Health": "OK",
                "HealthRollup": "OK"
            }
        },
        "MemorySummary": {
            "TotalSystemMemoryGiB": 96,
            "TotalSystemPersistentMemoryGiB": 0,
            "MemoryMirroring": "None",
            "Status": {
                "State": "Enabled",
                "Health": "OK",
                "HealthRollup": "OK"
            }
        },
        "Bios": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Bios"},
        "SecureBoot": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/SecureBoot"},
        "Processors": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors"},
        "Memory": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Memory"},
        "EthernetInterfaces": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces"},
        "SimpleStorage": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/SimpleStorage"},
        "LogServices": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/LogServices"},
        "GraphicsControllers": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/GraphicsControllers"},
        "USBControllers": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/USBControllers"},
        "Certificates": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Certificates"},
        "VirtualMedia": {"@odata.id": "/redfish/v1/Systems/437XR1138R2/VirtualMedia"},
        "Links": {
            "Chassis": [
                {"@odata.id": "/redfish/v1/Chassis/1U"}
            ],
            "ManagedBy": [
                {"@odata.id": "/redfish/v1/Managers/BMC"}
            ]
        },
        "Actions": {
            "#ComputerSystem.Reset": {
                "target": "/redfish/v1/Systems/437XR1138R2/Actions/ComputerSystem.Reset",
                "ResetType@Redfish.AllowableValues": [
                    "On",
                    "ForceOff",
                    "GracefulShutdown",
                    "GracefulRestart",
                    "ForceRestart",
                    "Nmi",
                    "ForceOn",
                    "PushPowerButton"
                ]
            },
            "Oem": {
                "#Contoso.Reset": {
                    "target": "/redfish/v1/Systems/437XR1138R2/Oem/Contoso/Actions/Contoso.Reset"
                }
            }
        },
        "@odata.id": "/redfish/v1/Systems/437XR1138R2"
    })
}
