pub mod api;
pub mod bios;
pub mod ethernet;
pub mod memory;
pub mod processors;
pub mod secure_boot;
pub mod service_root;

use serde_json::Value;

use crate::routes;

/// Ordered route table pairing each fixture path with its canned document.
///
/// Built once at startup and consumed into the router; every entry is an
/// exact-match GET route answering 200. The root and item-echo routes are
/// not table entries since they carry handler logic of their own.
pub fn table() -> Vec<(&'static str, Value)> {
    vec![
        (routes::API, api::person()),
        (routes::API_MYRESOURCE, api::fruits()),
        (routes::SERVICE_ROOT, service_root::service_root()),
        (routes::SYSTEMS, service_root::systems_collection()),
        (routes::SYSTEM, service_root::computer_system()),
        (routes::BIOS, bios::current_settings()),
        (routes::BIOS_SETTINGS, bios::pending_settings()),
        (routes::ETHERNET_INTERFACES, ethernet::collection()),
        (routes::ETHERNET_NIC1, ethernet::nic1()),
        (routes::ETHERNET_NIC2, ethernet::nic2()),
        (routes::MEMORY, memory::collection()),
        (routes::MEMORY_DIMM1, memory::dimm1()),
        (routes::MEMORY_DIMM1_ENVIRONMENT, memory::environment_metrics("DIMM1")),
        (routes::MEMORY_DIMM2, memory::dimm2()),
        (routes::MEMORY_DIMM2_ENVIRONMENT, memory::environment_metrics("DIMM2")),
        (routes::MEMORY_DIMM3, memory::dimm3()),
        (routes::MEMORY_DIMM3_ENVIRONMENT, memory::environment_metrics("DIMM3")),
        (routes::MEMORY_DIMM4, memory::dimm4()),
        (routes::PROCESSORS, processors::collection()),
        (routes::PROCESSOR_CPU1, processors::cpu1()),
        (routes::PROCESSOR_CPU1_ENVIRONMENT, processors::cpu1_environment_metrics()),
        (routes::PROCESSOR_CPU2, processors::cpu2()),
        (routes::PROCESSOR_FPGA1, processors::fpga1()),
        (routes::FPGA1_ACCELERATION_FUNCTIONS, processors::acceleration_functions()),
        (routes::FPGA1_COMPRESSION, processors::compression_function()),
        (routes::FPGA1_PROCESSOR_METRICS, processors::fpga1_metrics()),
        (routes::SECURE_BOOT, secure_boot::secure_boot()),
        (routes::SECURE_BOOT_DATABASES, secure_boot::databases_collection()),
        (routes::SECURE_BOOT_PK, secure_boot::pk()),
        (routes::SECURE_BOOT_PK_DEFAULT, secure_boot::pk_default()),
        (routes::SECURE_BOOT_KEK, secure_boot::kek()),
        (routes::SECURE_BOOT_KEK_DEFAULT, secure_boot::kek_default()),
        (routes::SECURE_BOOT_DB, secure_boot::db()),
        (routes::SECURE_BOOT_DB_DEFAULT, secure_boot::db_default()),
        (routes::SECURE_BOOT_DBX, secure_boot::dbx()),
        (routes::SECURE_BOOT_DBX_DEFAULT, secure_boot::dbx_default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_no_duplicate_paths() {
        let table = table();
        let paths: HashSet<&str> = table.iter().map(|(path, _)| *path).collect();
        assert_eq!(paths.len(), table.len());
    }

    #[test]
    fn test_table_covers_all_fixture_routes() {
        assert_eq!(table().len(), 36);
    }

    #[test]
    fn test_table_paths_are_absolute() {
        for (path, _) in table() {
            assert!(path.starts_with('/'), "relative path in table: {path}");
        }
    }

    #[test]
    fn test_redfish_documents_carry_their_own_odata_id() {
        for (path, fixture) in table() {
            if !path.starts_with("/redfish") {
                continue;
            }
            let odata_id = fixture["@odata.id"].as_str().unwrap();
            // The service root is the only resource whose id differs from
            // its path (trailing slash in the source data).
            if path == routes::SERVICE_ROOT {
                assert_eq!(odata_id, "/redfish/v1/");
            } else {
                assert_eq!(odata_id, path);
            }
        }
    }
}
