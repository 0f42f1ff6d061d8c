use serde_json::{json, Value};

/// NIC collection. Four members are listed but only the two physical
/// NICs have detail documents; VLAN1 and ToManager resolve to 404.
pub fn collection() -> Value {
    json!({
        "@odata.type": "#EthernetInterfaceCollection.EthernetInterfaceCollection",
        "Name": "Ethernet Interface Collection",
        "Description": "System NICs on Contoso Servers",
        "Members@odata.count": 4,
        "Members": [
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/12446A3B0411"},
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/12446A3B8890"},
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/VLAN1"},
            {"@odata.id": "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/ToManager"}
        ],
        "Oem": {},
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces"
    })
}

pub fn nic1() -> Value {
    json!({
        "@odata.type": "#EthernetInterface.v1_9_0.EthernetInterface",
        "Id": "12446A3B0411",
        "Name": "Ethernet Interface",
        "Description": "System NIC 1",
        "Status": {"State": "Enabled", "Health": "OK"},
        "EthernetInterfaceType": "Physical",
        "LinkStatus": "LinkUp",
        "PermanentMACAddress": "12:44:6A:3B:04:11",
        "MACAddress": "12:44:6A:3B:04:11",
        "SpeedMbps": 1000,
        "FullDuplex": true,
        "HostName": "web483",
        "FQDN": "web483.contoso.com",
        "IPv6DefaultGateway": "fe80::3ed9:2bff:fe34:600",
        "NameServers": ["names.contoso.com"],
        "IPv4Addresses": [
            {
                "Address": "192.168.0.10",
                "SubnetMask": "255.255.252.0",
                "AddressOrigin": "Static",
                "Gateway": "192.168.0.1"
            }
        ],
        "IPv6Addresses": [
            {
                "Address": "fe80::1ec1:deff:fe6f:1e24",
                "PrefixLength": 64,
                "AddressOrigin": "Static",
                "AddressState": "Preferred"
            }
        ],
        "VLAN": {"VLANEnable": false, "VLANId": 101},
        "TeamMode": "None",
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/12446A3B0411"
    })
}

pub fn nic2() -> Value {
    json!({
        "@odata.type": "#EthernetInterface.v1_9_0.EthernetInterface",
        "Id": "12446A3B8890",
        "Name": "Ethernet Interface",
        "Description": "System NIC 2",
        "Status": {"State": "Enabled", "Health": "OK"},
        "EthernetInterfaceType": "Physical",
        "LinkStatus": "LinkUp",
        "PermanentMACAddress": "12:44:6A:3B:88:90",
        "MACAddress": "AA:BB:CC:DD:EE:00",
        "SpeedMbps": 1000,
        "FullDuplex": true,
        "HostName": "backup-web483",
        "FQDN": "backup-web483.contoso.com",
        "IPv6DefaultGateway": "fe80::3ed9:2bff:fe34:600",
        "NameServers": ["names.contoso.com"],
        "IPv4Addresses": [
            {
                "Address": "192.168.0.11",
                "SubnetMask": "255.255.255.0",
                "AddressOrigin": "Static",
                "Gateway": "192.168.0.1"
            }
        ],
        "IPv6Addresses": [
            {
                "Address": "fe80::1ec1:deff:fe6f:1e33",
                "PrefixLength": 64,
                "AddressOrigin": "Static",
                "AddressState": "Preferred"
            }
        ],
        "VLAN": {"VLANEnable": true, "VLANId": 101},
        "TeamMode": "None",
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/12446A3B8890"
    })
}
