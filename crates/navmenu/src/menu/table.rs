//! Declared navigation menu and its resolution into [`MenuNode`]s.
//!
//! The menu is a fixed table. Labels are stored as translation keys and
//! resolved through a [`Translate`] implementation when the tree is built.
//! Some keys are dotted message keys (`nav.retrieve`), others are source
//! text used directly as the key (`新建仪表盘`); both are passed through as
//! declared.

use tracing::debug;

use super::node::{MenuFlags, MenuNode};
use crate::locale::Translate;

/// A declared menu entry, prior to localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Translation key for the label.
    pub key: &'static str,
    pub id: &'static str,
    pub level: u8,
    pub flags: MenuFlags,
    pub children: &'static [MenuEntry],
}

impl MenuEntry {
    /// A flagless entry with no children.
    pub const fn new(key: &'static str, id: &'static str, level: u8) -> Self {
        Self {
            key,
            id,
            level,
            flags: MenuFlags::NONE,
            children: &[],
        }
    }

    pub const fn flags(self, flags: MenuFlags) -> Self {
        Self { flags, ..self }
    }

    pub const fn children(self, children: &'static [MenuEntry]) -> Self {
        Self { children, ..self }
    }

    /// Resolve this entry and its descendants.
    ///
    /// The translator is called once per node, parent before children.
    pub fn resolve<T: Translate + ?Sized>(&self, translator: &T) -> MenuNode {
        MenuNode {
            name: translator.translate(self.key),
            id: self.id.to_string(),
            level: self.level,
            flags: self.flags,
            children: resolve_entries(self.children, translator),
        }
    }
}

/// Root entries of the navigation menu, in display order.
pub static NAV_MENU: &[MenuEntry] = &[
    MenuEntry::new("nav.retrieve", "retrieve", 1),
    MenuEntry::new("nav.dashboard", "dashboard", 1)
        .flags(MenuFlags::DROP_DOWN)
        .children(DASHBOARD),
    MenuEntry::new("nav.extract", "extract", 1),
    MenuEntry::new("trace.trace", "trace", 1),
    MenuEntry::new("nav.monitors", "monitor", 1).children(MONITOR),
    MenuEntry::new("nav.manage", "manage", 1)
        .flags(MenuFlags::DROP_DOWN)
        .children(MANAGE),
];

const DASHBOARD: &[MenuEntry] = &[
    MenuEntry::new("新建仪表盘", "create_dashboard", 2).flags(MenuFlags::DASHBOARD_ACTION),
    MenuEntry::new("新建目录", "create_folder", 2).flags(MenuFlags::DASHBOARD_ACTION),
    MenuEntry::new("导入仪表盘", "import_dashboard", 2).flags(MenuFlags::DASHBOARD_ACTION),
];

const MONITOR: &[MenuEntry] =
    &[MenuEntry::new("nav.alarmStrategy", "alarmStrategy", 2).children(ALARM_STRATEGY)];

const ALARM_STRATEGY: &[MenuEntry] = &[
    MenuEntry::new("nav.addstrategy", "addstrategy", 3),
    MenuEntry::new("nav.editstrategy", "editstrategy", 3),
];

const MANAGE: &[MenuEntry] = &[
    MenuEntry::new("nav.dataSource", "manage", 2).children(DATA_SOURCE),
    MenuEntry::new("nav.indexSet", "indexSet", 2).children(INDEX_SET),
    MenuEntry::new("链路配置", "linkConfiguration", 2),
    MenuEntry::new("nav.permissionGroup", "permissionGroup", 2),
    MenuEntry::new("nav.v3Migrate", "migrate", 2),
    MenuEntry::new("nav.extractManage", "manageExtract", 2),
];

const DATA_SOURCE: &[MenuEntry] = &[
    MenuEntry::new("nav.collectAccess", "collectAccess", 3).children(COLLECT_ACCESS),
    MenuEntry::new("nav.esAccess", "esAccess", 3),
];

const COLLECT_ACCESS: &[MenuEntry] = &[
    MenuEntry::new("nav.New_acquisition", "collectAdd", 4),
    MenuEntry::new("nav.Edit_collection", "collectEdit", 4),
    MenuEntry::new("nav.Enable_collections", "collectStart", 4),
    MenuEntry::new("nav.Disable_collection", "collectStop", 4),
    MenuEntry::new("nav.Field_extraction", "collectField", 4),
    MenuEntry::new("nav.Configuration_details", "allocation", 4).children(ALLOCATION),
];

const ALLOCATION: &[MenuEntry] = &[MenuEntry::new("nav.Data_sampling", "jsonFormat", 5)];

const INDEX_SET: &[MenuEntry] = &[
    MenuEntry::new("nav.addIndexSet", "addIndexSet", 3),
    MenuEntry::new("nav.editIndexSet", "editIndexSet", 3),
];

/// Resolve a slice of declared entries, preserving order.
pub fn resolve_entries<T: Translate + ?Sized>(
    entries: &[MenuEntry],
    translator: &T,
) -> Vec<MenuNode> {
    entries.iter().map(|e| e.resolve(translator)).collect()
}

/// Build the navigation menu with labels resolved by `translator`.
pub fn build_menu<T: Translate + ?Sized>(translator: &T) -> Vec<MenuNode> {
    let menu = resolve_entries(NAV_MENU, translator);
    debug!(roots = menu.len(), "built navigation menu");
    menu
}
