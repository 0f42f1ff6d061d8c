// Route path constants - single source of truth for all served paths

pub const ROOT: &str = "/";
pub const API: &str = "/api";
pub const API_MYRESOURCE: &str = "/api/myresource";
pub const ITEM: &str = "/items/{item_id}";

pub const SERVICE_ROOT: &str = "/redfish/v1";
pub const SYSTEMS: &str = "/redfish/v1/Systems";
pub const SYSTEM: &str = "/redfish/v1/Systems/437XR1138R2";

pub const BIOS: &str = "/redfish/v1/Systems/437XR1138R2/Bios";
pub const BIOS_SETTINGS: &str = "/redfish/v1/Systems/437XR1138R2/Bios/Settings";

pub const ETHERNET_INTERFACES: &str = "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces";
pub const ETHERNET_NIC1: &str = "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/12446A3B0411";
pub const ETHERNET_NIC2: &str = "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/12446A3B8890";

pub const MEMORY: &str = "/redfish/v1/Systems/437XR1138R2/Memory";
pub const MEMORY_DIMM1: &str = "/redfish/v1/Systems/437XR1138R2/Memory/DIMM1";
pub const MEMORY_DIMM1_ENVIRONMENT: &str =
    "/redfish/v1/Systems/437XR1138R2/Memory/DIMM1/EnvironmentMetrics";
pub const MEMORY_DIMM2: &str = "/redfish/v1/Systems/437XR1138R2/Memory/DIMM2";
pub const MEMORY_DIMM2_ENVIRONMENT: &str =
    "/redfish/v1/Systems/437XR1138R2/Memory/DIMM2/EnvironmentMetrics";
pub const MEMORY_DIMM3: &str = "/redfish/v1/Systems/437XR1138R2/Memory/DIMM3";
pub const MEMORY_DIMM3_ENVIRONMENT: &str =
    "/redfish/v1/Systems/437XR1138R2/Memory/DIMM3/EnvironmentMetrics";
pub const MEMORY_DIMM4: &str = "/redfish/v1/Systems/437XR1138R2/Memory/DIMM4";

pub const PROCESSORS: &str = "/redfish/v1/Systems/437XR1138R2/Processors";
pub const PROCESSOR_CPU1: &str = "/redfish/v1/Systems/437XR1138R2/Processors/CPU1";
pub const PROCESSOR_CPU1_ENVIRONMENT: &str =
    "/redfish/v1/Systems/437XR1138R2/Processors/CPU1/EnvironmentMetrics";
pub const PROCESSOR_CPU2: &str = "/redfish/v1/Systems/437XR1138R2/Processors/CPU2";
pub const PROCESSOR_FPGA1: &str = "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1";
pub const FPGA1_ACCELERATION_FUNCTIONS: &str =
    "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/AccelerationFunctions";
pub const FPGA1_COMPRESSION: &str =
    "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/AccelerationFunctions/Compression";
pub const FPGA1_PROCESSOR_METRICS: &str =
    "/redfish/v1/Systems/437XR1138R2/Processors/FPGA1/ProcessorMetrics";

pub const SECURE_BOOT: &str = "/redfish/v1/Systems/437XR1138R2/SecureBoot";
pub const SECURE_BOOT_DATABASES: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases";
pub const SECURE_BOOT_PK: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases/PK";
pub const SECURE_BOOT_PK_DEFAULT: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases/PKDefault";
pub const SECURE_BOOT_KEK: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases/KEK";
pub const SECURE_BOOT_KEK_DEFAULT: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases/KEKDefault";
pub const SECURE_BOOT_DB: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases/db";
pub const SECURE_BOOT_DB_DEFAULT: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases/dbDefault";
pub const SECURE_BOOT_DBX: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases/dbx";
pub const SECURE_BOOT_DBX_DEFAULT: &str =
    "/redfish/v1/Systems/437XR1138R2/SecureBoot/SecureBootDatabases/dbxDefault";
