//! Static template catalog.
//!
//! A fixed, read-only list of prebuilt queries partitioned by category.
//! The catalog is process data defined once here; order within a category
//! is declaration order and stable.

use crate::models::{CategoryFilter, Template, TemplateCategory};

const CATALOG: &[Template] = &[
    // Files
    Template {
        name: "Exposed Log Files",
        category: TemplateCategory::Files,
        query: "filetype:log inurl:log",
    },
    Template {
        name: "SQL Dumps",
        category: TemplateCategory::Files,
        query: "filetype:sql intext:\"INSERT INTO\" intext:\"VALUES\"",
    },
    Template {
        name: "Private Keys",
        category: TemplateCategory::Files,
        query: "filetype:pem intext:\"BEGIN RSA PRIVATE KEY\"",
    },
    Template {
        name: "Configuration Files",
        category: TemplateCategory::Files,
        query: "filetype:conf inurl:config",
    },
    Template {
        name: "Backup Files",
        category: TemplateCategory::Files,
        query: "filetype:bak inurl:backup",
    },
    Template {
        name: "Password Lists",
        category: TemplateCategory::Files,
        query: "filetype:txt intext:password",
    },
    Template {
        name: "Excel Spreadsheets",
        category: TemplateCategory::Files,
        query: "filetype:xls intext:confidential",
    },
    Template {
        name: "PDF Documents",
        category: TemplateCategory::Files,
        query: "filetype:pdf intext:\"confidential\"",
    },
    Template {
        name: "Email Lists",
        category: TemplateCategory::Files,
        query: "filetype:csv intext:email",
    },
    Template {
        name: "Source Code",
        category: TemplateCategory::Files,
        query: "filetype:java intext:\"password\"",
    },
    // Vulnerabilities
    Template {
        name: "Exposed .env Files",
        category: TemplateCategory::Vulns,
        query: "filetype:env intext:DB_PASSWORD",
    },
    Template {
        name: "Git Exposure",
        category: TemplateCategory::Vulns,
        query: "inurl:.git intitle:\"Index of\"",
    },
    Template {
        name: "PHP Info Pages",
        category: TemplateCategory::Vulns,
        query: "inurl:phpinfo.php",
    },
    Template {
        name: "SQL Errors",
        category: TemplateCategory::Vulns,
        query: "intext:\"SQL syntax\" intext:\"error\"",
    },
    Template {
        name: "Directory Listings",
        category: TemplateCategory::Vulns,
        query: "intitle:\"Index of\" \"parent directory\"",
    },
    Template {
        name: "Admin Panels",
        category: TemplateCategory::Vulns,
        query: "inurl:admin intitle:login",
    },
    Template {
        name: "Test/Dev Sites",
        category: TemplateCategory::Vulns,
        query: "inurl:test OR inurl:dev intext:\"under construction\"",
    },
    Template {
        name: "WordPress Backups",
        category: TemplateCategory::Vulns,
        query: "filetype:sql intext:\"wp_users\"",
    },
    Template {
        name: "FTP Credentials",
        category: TemplateCategory::Vulns,
        query: "filetype:txt intext:\"ftp://\"",
    },
    Template {
        name: "API Keys Exposed",
        category: TemplateCategory::Vulns,
        query: "intext:\"api_key\" filetype:json",
    },
    // Network
    Template {
        name: "Webcams",
        category: TemplateCategory::Network,
        query: "inurl:view.shtml intitle:\"Network Camera\"",
    },
    Template {
        name: "Printers",
        category: TemplateCategory::Network,
        query: "inurl:hp/device/this.LCDispatcher",
    },
    Template {
        name: "Network Devices",
        category: TemplateCategory::Network,
        query: "intitle:\"Router Configuration\"",
    },
    Template {
        name: "Server Status",
        category: TemplateCategory::Network,
        query: "intitle:\"Apache Status\" intext:\"Server Version\"",
    },
    Template {
        name: "Jenkins CI",
        category: TemplateCategory::Network,
        query: "intitle:\"Dashboard [Jenkins]\"",
    },
    Template {
        name: "Grafana",
        category: TemplateCategory::Network,
        query: "intitle:\"Grafana\" inurl:3000",
    },
    Template {
        name: "Kibana",
        category: TemplateCategory::Network,
        query: "intitle:\"Kibana\" inurl:5601",
    },
    Template {
        name: "Database Admin",
        category: TemplateCategory::Network,
        query: "intitle:\"phpMyAdmin\" intext:\"Welcome to phpMyAdmin\"",
    },
    Template {
        name: "Docker Registries",
        category: TemplateCategory::Network,
        query: "inurl:5000/v2/_catalog",
    },
    Template {
        name: "Redis Commander",
        category: TemplateCategory::Network,
        query: "intitle:\"Redis Commander\"",
    },
    // OSINT
    Template {
        name: "LinkedIn Profiles",
        category: TemplateCategory::Osint,
        query: "site:linkedin.com intitle:\"CISO\"",
    },
    Template {
        name: "GitHub Repos",
        category: TemplateCategory::Osint,
        query: "site:github.com intext:\"password\"",
    },
    Template {
        name: "Pastebin Leaks",
        category: TemplateCategory::Osint,
        query: "site:pastebin.com intext:\"password\"",
    },
    Template {
        name: "Public Documents",
        category: TemplateCategory::Osint,
        query: "site:docs.google.com inurl:edit",
    },
];

/// The full catalog in declaration order.
pub fn catalog() -> &'static [Template] {
    CATALOG
}

/// Templates passing the given selector, preserving declaration order.
pub fn filter(selector: CategoryFilter) -> Vec<Template> {
    CATALOG
        .iter()
        .copied()
        .filter(|t| selector.matches(t.category))
        .collect()
}
