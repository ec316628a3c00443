//! Synonym mapping between canonical component names and their aliases.

use serde::{Deserialize, Serialize};

/// One canonical term and the aliases it is known by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub canonical: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Ordered canonical → aliases mapping. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymMap {
    entries: Vec<SynonymEntry>,
}

impl SynonymMap {
    pub fn new(entries: Vec<SynonymEntry>) -> Self {
        Self { entries }
    }

    /// The automotive electrical dictionary shipped with the crate.
    pub fn builtin() -> Self {
        DEFAULT_SYNONYMS
            .iter()
            .map(|(canonical, aliases)| SynonymEntry {
                canonical: (*canonical).to_string(),
                aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            })
            .collect()
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SynonymEntry> for SynonymMap {
    fn from_iter<T: IntoIterator<Item = SynonymEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[rustfmt::skip]
const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    // Power feeds
    ("蓄电池电源", &["电瓶电源", "蓄电池供电", "电瓶供电"]),
    ("ACC电源", &["附件档电源", "ACC供电", "附件电源"]),
    ("ON电源", &["点火档电源", "ON供电", "点火电源"]),

    // Switches
    ("大灯开关", &["前照灯开关", "头灯开关"]),
    ("雾灯开关", &["前雾灯开关", "后雾灯开关", "雾光灯开关"]),
    ("制动灯开关", &["刹车灯开关", "制动开关", "刹车开关"]),
    ("倒车灯开关", &["倒挡灯开关", "倒车开关"]),
    ("车门开关", &["车门感应开关", "车门状态开关"]),
    ("ESC关断开关", &["ESC关闭开关", "电子稳定程序关断开关"]),

    // Relays
    ("近光灯继电器", &["近光继电器", "大灯近光继电器"]),
    ("远光灯继电器", &["远光继电器", "大灯远光继电器"]),
    ("ACC继电器", &["附件档继电器", "ACC档继电器"]),
    ("ON继电器", &["点火档继电器", "ON档继电器"]),
    ("起动继电器", &["启动继电器"]),

    // Sensors
    ("气压传感器", &["气压传感装置", "压力传感器（气压）"]),
    ("燃油传感器", &["油量传感器", "燃油液位传感器", "油量传感装置"]),
    ("里程表传感器", &["车速传感器", "里程传感器"]),
    ("轮速传感器", &["车轮速度传感器", "车轮转速传感器"]),

    // Actuators
    ("门锁电机", &["中控门锁电机", "车门锁电机"]),
    ("车窗电机", &["门窗电机", "车窗升降电机"]),
    ("举升电机", &["驾驶室举升电机", "升降电机"]),
    ("雨刮电机", &["刮水器电机", "雨刷电机"]),

    // Harnesses and connectors
    ("接插件", &["连接器", "插头", "插座"]),
    ("线束", &["导线束", "电缆束"]),

    // Chassis control units
    ("ADR控制单元", &["ADR控制器", "ADR控制模块"]),
    ("ECAS控制器", &["电子控制空气悬架控制器", "空气悬架控制单元"]),
    ("ABS控制器", &["防抱死制动系统控制器", "防抱死系统控制单元"]),
    ("ESC控制器", &["电子稳定控制系统控制器", "车身稳定控制单元"]),
];
