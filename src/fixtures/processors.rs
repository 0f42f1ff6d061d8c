use serde_json::{json, Value};

pub fn collection() -> Value {
    json!({
        "@odata.type": "#ProcessorCollection.ProcessorCollection",
        "Name": "Processors Collection",
        "Members@odata.count": 3,
        "Members": [
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/CPU1"},
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/CPU2"},
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1"}
        ],
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors"
    })
}

pub fn cpu1() -> Value {
    json!({
        "@odata.type": "#Processor.v1_16_0.Processor",
        "Id": "CPU1",
        "Name": "Processor",
        "Socket": "CPU 1",
        "ProcessorType": "CPU",
        "ProcessorArchitecture": "x86",
        "InstructionSet": "x86-64",
        "Manufacturer": "Intel(R) Corporation",
        "Model": "Multi-Core Intel(R) Xeon(R) processor 7xxx Series",
        "ProcessorId": {
            "VendorId": "GenuineIntel",
            "IdentificationRegisters": "0x34AC34DC8901274A",
            "EffectiveFamily": "0x42",
            "EffectiveModel": "0x61",
            "Step": "0x1",
            "MicrocodeInfo": "0x429943"
        },
        "AdditionalFirmwareVersions": {
            "Microcode": "0x46"
        },
        "MaxSpeedMHz": 3700,
        "OperatingSpeedMHz": 2333,
        "OperatingSpeedRangeMHz": {
            "DataSourceUri": "/redfish/v1/Chassis/1U/Controls/CPU1Freq",
            "ControlMode": "Automatic",
            "AllowableMin": 1200,
            "SettingMin": 2000,
            "SettingMax": 2400,
            "AllowableMax": 3700
        },
        "TotalCores": 8,
        "TotalThreads": 16,
        "Status": {"State": "Enabled", "Health": "OK"},
        "EnvironmentMetrics": {
            "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/CPU1/EnvironmentMetrics"
        },
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/CPU1"
    })
}

pub fn cpu1_environment_metrics() -> Value {
    json!({
        "@odata.type": "#EnvironmentMetrics.v1_3_0.EnvironmentMetrics",
        "Id": "EnvironmentMetrics",
        "Name": "Processor Environment Metrics",
        "TemperatureCelsius": {
            "DataSourceUri": "/redfish/v1/Chassis/1U/Sensors/CPU1Temp",
            "Reading": 44
        },
        "PowerWatts": {
            "DataSourceUri": "/redfish/v1/Chassis/1U/Sensors/CPU1Power",
            "Reading": 12.87
        },
        "FanSpeedsPercent": [
            {
                "DataSourceUri": "/redfish/v1/Chassis/1U/Sensors/CPUFan1",
                "DeviceName": "CPU #1 Fan Speed",
                "Reading": 80
            }
        ],
        "Oem": {},
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/CPU1/EnvironmentMetrics"
    })
}

/// CPU2 is an empty socket.
pub fn cpu2() -> Value {
    json!({
        "@odata.type": "#Processor.v1_16_0.Processor",
        "Id": "CPU2",
        "Name": "Processor",
        "Socket": "CPU 2",
        "ProcessorType": "CPU",
        "Status": {"State": "Absent"},
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/CPU2"
    })
}

/// Discrete FPGA accelerator with one reconfiguration slot bound to the
/// Compression acceleration function.
pub fn fpga1() -> Value {
    json!({
        "@odata.type": "#Processor.v1_16_0.Processor",
        "Id": "FPGA1",
        "Name": "FPGA",
        "ProcessorType": "FPGA",
        "ProcessorArchitecture": "OEM",
        "InstructionSet": "OEM",
        "Manufacturer": "Intel(R) Corporation",
        "Model": "Stratix 10",
        "UUID": "00000000-0000-0000-0000-000000000000",
        "Status": {"State": "Enabled", "Health": "OK"},
        "Metrics": {
            "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/ProcessorMetrics"
        },
        "TDPWatts": 120,
        "MaxTDPWatts": 150,
        "ProcessorMemory": [
            {
                "IntegratedMemory": true,
                "MemoryType": "HBM2",
                "CapacityMiB": 512,
                "SpeedMHz": 1066
            }
        ],
        "FPGA": {
            "FpgaType": "Discrete",
            "Model": "Stratix10",
            "FirmwareId": "0x6400002fc614bb9",
            "FirmwareManufacturer": "Intel(R) Corporation",
            "FirmwareVersion": "Blue v.1.00.86",
            "HostInterface": {
                "InterfaceType": "PCIe",
                "PCIe": {
                    "MaxPCIeType": "Gen4",
                    "MaxLanes": 8
                }
            },
            "ExternalInterfaces": [
                {
                    "InterfaceType": "Ethernet",
                    "Ethernet": {
                        "MaxSpeedMbps": 10240,
                        "MaxLanes": 4
                    }
                }
            ],
            "PCIeVirtualFunctions": 1,
            "ProgrammableFromHost": true,
            "ReconfigurationSlots": [
                {
                    "SlotId": "AFU0",
                    "UUID": "00000000-0000-0000-0000-000000000000",
                    "ProgrammableFromHost": true,
                    "AccelerationFunction": {
                        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/AccelerationFunctions/Compression"
                    }
                }
            ],
            "Oem": {}
        },
        "AccelerationFunctions": {
            "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/AccelerationFunctions"
        },
        "Links": {
            "Endpoints": [],
            "ConnectedProcessors": [
                {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/CPU1"}
            ]
        },
        "Actions": {
            "#Processor.Reset": {
                "target": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/Actions/Processor.Reset"
            }
        },
        "Oem": {},
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1"
    })
}

pub fn acceleration_functions() -> Value {
    json!({
        "@odata.type": "#AccelerationFunctionCollection.AccelerationFunctionCollection",
        "Name": "Acceleration Function Collection",
        "Members@odata.count": 1,
        "Members": [
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/AccelerationFunctions/Compression"}
        ],
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/AccelerationFunctions"
    })
}

pub fn compression_function() -> Value {
    json!({
        "@odata.type": "#AccelerationFunction.v1_0_3.AccelerationFunction",
        "Id": "Compression",
        "Name": "Compression Accelerator",
        "Description": "Compression Acceleration Function",
        "Status": {
            "State": "Enabled",
            "Health": "OK",
            "HealthRollup": "OK"
        },
        "UUID": "00000000-0000-0000-0000-000000000000",
        "FpgaReconfigurationSlots": ["AFU0"],
        "AccelerationFunctionType": "Compression",
        "Manufacturer": "Intel (R) Corporation",
        "Version": "Green Compression Type 1 v.1.00.86",
        "PowerWatts": 15,
        "Links": {
            "Endpoints": [],
            "PCIeFunctions": []
        },
        "Oem": {},
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/AccelerationFunctions/Compression"
    })
}

pub fn fpga1_metrics() -> Value {
    json!({
        "@odata.type": "#ProcessorMetrics.v1_6_0.ProcessorMetrics",
        "Id": "Metrics",
        "Description": "Processor Metrics",
        "Name": "Processor Metrics",
        "BandwidthPercent": 62,
        "AverageFrequencyMHz": 2400,
        "ThrottlingCelsius": 65,
        "TemperatureCelsius": 41,
        "ConsumedPowerWatt": 82,
        "FrequencyRatio": 0.00432,
        "Cache": [
            {
                "Level": "3",
                "CacheMiss": 0.12,
                "HitRatio": 0.719,
                "CacheMissesPerInstruction": 0.00088,
                "OccupancyBytes": 3030144,
                "OccupancyPercent": 90.1
            }
        ],
        "LocalMemoryBandwidthBytes": 18253611008u64,
        "RemoteMemoryBandwidthBytes": 81788928,
        "KernelPercent": 2.3,
        "UserPercent": 34.7,
        "CoreMetrics": [
            {
                "CoreId": "core0",
                "InstructionsPerCycle": 1.16,
                "UnhaltedCycles": 6254383746u64,
                "MemoryStallCount": 58372,
                "IOStallCount": 2634872,
                "CoreCache": [
                    {
                        "Level": "2",
                        "CacheMiss": 0.472,
                        "HitRatio": 0.57,
                        "CacheMissesPerInstruction": 0.00346,
                        "OccupancyBytes": 198231,
                        "OccupancyPercent": 77.4
                    }
                ],
                "CStateResidency": [
                    {"Level": "C0", "Residency": 1.13},
                    {"Level": "C1", "Residency": 26},
                    {"Level": "C3", "Residency": 0.00878},
                    {"Level": "C6", "Residency": 0.361},
                    {"Level": "C7", "Residency": 72.5}
                ]
            }
        ],
        "Oem": {},
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/ProcessorMetrics"
    })
}
