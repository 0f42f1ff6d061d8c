use serde_json::{json, Map, Value};

const DATABASES: &str = "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases";

pub fn secure_boot() -> Value {
    json!({
        "@odata.type": "#SecureBoot.v1_1_0.SecureBoot",
        "Id": "SecureBoot",
        "Name": "UEFI Secure Boot",
        "Actions": {
            "#SecureBoot.ResetKeys": {
                "target": "/redfish/v1/Systems/437XR1138R2/SecureBoot/Actions/SecureBoot.ResetKeys",
                "ResetKeysType@Redfish.AllowableValues": [
                    "ResetAllKeysToDefault",
                    "DeleteAllKeys",
                    "DeletePK"
                ]
            },
            "Oem": {}
        },
        "SecureBootEnable": false,
        "SecureBootCurrentBoot": "Disabled",
        "SecureBootMode": "UserMode",
        "SecureBootDatabases": {"@odata.id": DATABASES},
        "Oem": {},
        "@odata.id": "/redfish/v1/Systems/437XR1138R2/SecureBoot"
    })
}

pub fn databases_collection() -> Value {
    json!({
        "@odata.type": "#SecureBootDatabaseCollection.SecureBootDatabaseCollection",
        "Name": "UEFI SecureBoot Database Collection",
        "Members@odata.count": 8,
        "Members": [
            {"@odata.id": format!("{DATABASES}/PK")},
            {"@odata.id": format!("{DATABASES}/KEK")},
            {"@odata.id": format!("{DATABASES}/db")},
            {"@odata.id": format!("{DATABASES}/dbx")},
            {"@odata.id": format!("{DATABASES}/PKDefault")},
            {"@odata.id": format!("{DATABASES}/KEKDefault")},
            {"@odata.id": format!("{DATABASES}/dbDefault")},
            {"@odata.id": format!("{DATABASES}/dbxDefault")}
        ],
        "Oem": {},
        "@odata.id": DATABASES
    })
}

pub fn pk() -> Value {
    database("PK", "PK - Platform Key", true, false, true)
}

pub fn pk_default() -> Value {
    database("PKDefault", "PKDefault - Default Platform Key", true, false, false)
}

pub fn kek() -> Value {
    database("KEK", "KEK - Key Exchange Key Database", true, false, true)
}

pub fn kek_default() -> Value {
    database(
        "KEKDefault",
        "KEKDefault - Default Key Exchange Key Database",
        true,
        false,
        false,
    )
}

pub fn db() -> Value {
    database("db", "db - Authorized Signature Database", true, true, true)
}

pub fn db_default() -> Value {
    database(
        "dbDefault",
        "dbDefault - Default Authorized Signature Database",
        false,
        true,
        false,
    )
}

pub fn dbx() -> Value {
    database("dbx", "dbx - Forbidden Signature Database", true, true, true)
}

pub fn dbx_default() -> Value {
    database(
        "dbxDefault",
        "dbxDefault - Default Forbidden Signature Database",
        false,
        true,
        false,
    )
}

/// The eight database members share one shape; they differ in which of
/// the Certificates/Signatures links are present and whether a ResetKeys
/// action is offered (the *Default databases are read-only).
fn database(id: &str, name: &str, certificates: bool, signatures: bool, resettable: bool) -> Value {
    let base = format!("{DATABASES}/{id}");
    let mut doc = Map::new();
    doc.insert(
        "@odata.type".to_string(),
        json!("#SecureBootDatabase.v1_0_1.SecureBootDatabase"),
    );
    doc.insert("Id".to_string(), json!(id));
    doc.insert("Name".to_string(), json!(name));
    doc.insert(
        "Description".to_string(),
        json!(format!("UEFI {id} Secure Boot Database")),
    );
    doc.insert("DatabaseId".to_string(), json!(id));
    if certificates {
        doc.insert(
            "Certificates".to_string(),
            json!({"@odata.id": format!("{base}/Certificates/")}),
        );
    }
    if signatures {
        doc.insert(
            "Signatures".to_string(),
            json!({"@odata.id": format!("{base}/Signatures/")}),
        );
    }
    if resettable {
        doc.insert(
            "Actions".to_string(),
            json!({
                "#SecureBootDatabase.ResetKeys": {
                    "target": format!("{base}/Actions/SecureBootDatabase.ResetKeys"),
                    "ResetKeysType@Redfish.AllowableValues": [
                        "ResetAllKeysToDefault",
                        "DeleteAllKeys"
                    ]
                },
                "Oem": {}
            }),
        );
    }
    doc.insert("Oem".to_string(), json!({}));
    doc.insert("@odata.id".to_string(), json!(base));
    Value::Object(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_databases_have_no_reset_action() {
        for doc in [pk_default(), kek_default(), db_default(), dbx_default()] {
            assert!(doc.get("Actions").is_none(), "{} is read-only", doc["Id"]);
        }
    }

    #[test]
    fn test_signature_databases_link_both_stores() {
        for doc in [db(), dbx()] {
            assert!(doc.get("Certificates").is_some());
            assert!(doc.get("Signatures").is_some());
        }
        assert!(pk().get("Signatures").is_none());
        assert!(db_default().get("Certificates").is_none());
    }

    #[test]
    fn test_collection_members_match_registered_databases() {
        let collection = databases_collection();
        let members = collection["Members"].as_array().unwrap();
        assert_eq!(members.len(), 8);
        assert_eq!(collection["Members@odata.count"], 8);
        for member in members {
            let id = member["@odata.id"].as_str().unwrap();
            assert!(id.starts_with(DATABASES));
        }
    }
}
