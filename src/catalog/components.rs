//! Built-in component catalog for commercial-vehicle electrical diagrams.
//!
//! Entries are matched case-insensitively as substrings. Order is the
//! match-priority tiebreak; repeated entries are collapsed on load.

#[rustfmt::skip]
pub(crate) const DEFAULT_COMPONENTS: &[&str] = &[
    // Splitters and junctions
    "接小灯分线器", "小灯分线器", "分线器", "接线器", "分线盒", "接T15分线器", "ACC分线器",

    // Wipers
    "雨刮间歇", "雨刮间歇控制器", "雨刮电机", "雨刮开关", "洗涤电机", "雨刮间歇继电器",

    // Instrument cluster
    "仪表电源", "仪表盘电源", "仪表供电", "仪表负", "组合仪表",
    "开关符号指示", "档位指示", "0档指示", "小灯指示灯", "大灯指示灯",
    "前雾指示灯", "后雾指示灯", "充电指示灯", "驻车制动指示", "高档指示灯开关",
    "分动器高档指示", "分动器低档指示", "行车取力指示",

    // Switches
    "大灯开关", "后雾灯开关", "前雾灯开关", "自动灯光继电器", "近光灯开关",
    "倒车灯开关", "制动灯开关", "集成制动开关限压总阀开关", "接左车门开关",
    "接右车门开关", "蹄片磨损开关", "驻车制动开关", "副驾安全带报警开关",
    "主驾安全带报警开关", "轴间差速锁开关（后桥）", "轮间差速锁开关（中桥）",
    "轮间差速锁开关（后桥）", "取力器开关", "危险报警开关", "喇叭按钮",
    "多功能方向盘", "右侧多功能方向盘开关", "转换开关", "并联油箱开关",
    "作业形式转换开关", "离合器开关", "前照灯高度调节开关", "驾驶室翻转开关",
    "工作灯开关", "右组合开关", "左组合开关", "顶灯翘板开关", "左转向开关",
    "右转向开关", "轴差闭锁开关", "轮差闭锁开关", "取力器选择开关", "ESC关断开关",
    "ESC关断开关 自复位", "坡起开关 自复位", "独立手刹开关（自复位）", "远程油门开关",
    "多功率省油开关", "车下熄火开关", "车下起动开关", "紧急呼叫按钮", "按制动灯开关",

    // Relays
    "ACC继电器", "ON继电器", "ADR继电器", "防盗喇叭继电器", "电喇叭继电器",
    "日间行车灯控制输出", "制动灯继电器驱动", "倒车灯继电器驱动", "离合信号抓换继电器",
    "空调请求继电器", "起动继电器", "制动继电器", "左低音扬声器继电器",
    "右低音扬声器继电器", "举升过渡继电器", "举升继电器", "主副油箱切换继电器",
    "近光灯继电器", "远光灯继电器", "前雾灯继电器", "雾灯继电器", "后雾灯继电器",
    "自动灯光继电器", "后视镜加热继电器", "空调请求开关继电器", "电磁式电源总开关继电器",
    "起动锁止继电器", "低速档继电器", "高速档继电器", "驾驶室翻转继电器", "工作灯继电器",

    // Sensors
    "气压传感器", "里程表传感器", "燃油传感器", "油量传感器", "车速传感器",
    "环境温度传感器", "油温传感器", "水温传感器", "阳光传感器", "室内温度传感器",
    "室外温度传感器", "蒸发器温度传感器", "毫米波雷达", "AEBS（摄像头）",
    "ADAS前视摄像头", "左侧摄像头", "右侧摄像头", "四方位主机", "前照摄像头",
    "后照摄像头", "倒车摄像头", "面部摄像头", "一体式摄像头", "前向监控摄像头",
    "雨量光线传感器", "轮速传感器", "前桥轮速传感器（左）", "前桥轮速传感器（右）",
    "后桥轮速传感", "后桥轮速传感器", "高度传感器左", "高度传感器右",
    "高度传感器后轴左", "高度传感器后轴右", "前桥压力传感器", "三态压力开关",
    "压力传感器", "转角传感器", "横摆率传感器", "挂车气压开关", "制动信号传输器（BST）",
    "左前轮速传感器", "右前轮速传感器", "左后轮速传感器", "右后轮速传感器",
    "里程表传感器", "变速线里程表传感器", "分动器里程表传感器", "主油箱传感器",
    "副油箱传感器", "LNG变送器", "燃气泄漏报警器", "燃气泄露警报器",

    // Actuators and loads
    "起动机", "自励发电机", "蓄电池一", "蓄电池二", "气喇叭", "电喇叭",
    "左低音扬声器", "右低音扬声器", "左前扬声器", "右前扬声器", "左后扬声器",
    "右后扬声器", "鼓风机电机", "驾驶室翻转继电器", "工作灯继电器",
    "右前组合灯调光电机", "左前组合灯调光电机", "电动翻转电机", "门窗控制单元",
    "中控锁执行电机左", "中控锁执行电机右", "主驾侧玻璃升降机", "副驾侧玻璃升降机",
    "后视镜加热丝", "燃气泄露警报器", "LNG变送器", "燃气泄漏报警器", "加热器总成",
    "电磁泵", "油泵", "独立暖风加热器", "排气制动电磁阀", "电子油门踏板",
    "远程油门控制器总成", "RCU缓速器", "比例阀", "紧急呼叫系统（格洛纳斯/GLONASS）",
    "天行健（IVT）", "收放机总成", "逆变电源", "电压变换器", "DC-DC变换器",
    "交流输出 220V插座", "12V接口", "USB接口（卧铺）", "USB接口（仪表合）",
    "电源车载插座", "点烟器", "220V车载电源插座", "驾驶室气囊断气电磁阀",
    "喇叭继电器", "气电喇叭转换开关", "司机侧门锁电机", "乘客侧门锁电机",
    "中控门锁执行器-司机侧", "中控门锁执行器-乘客侧", "举升电机", "举升电机温控开关",
    "主副油箱转换阀", "干燥器", "轴间差速电磁阀", "轮间差速电磁阀", "取力器电磁阀",
    "取力器选择电磁阀", "ECAS电磁阀", "电磁阀后轴左", "电磁阀后轴右", "电磁阀中心",
    "左前ABS阀", "前右ABS阀", "左前轴电磁阀", "右前轴电磁阀", "左后桥电磁阀",
    "右后桥电磁阀", "前桥AEBS继动阀", "后桥AEBS继动阀", "ASR后桥电磁阀", "ASR前桥电磁阀",
    "挂车控制模块", "挂车控制模块（TCM）", "国产WABCO ABS+ESC控制器", "国产KNORR ABS+ESC控制器",
    "ABS控制器", "DCM(集成RKE)", "ECAS控制器", "变速箱控制器", "OEM换挡控制器",
    "玉柴国六天然气ECI-CFV ECU", "4G车载终端（IVT）", "远程排放终端", "诊断接口",
    "鼓风机调速模块", "内外循环电机", "模式风门电机", "水阀电机", "模式电机",
    "空调压缩机离合器", "供油箱换向阀总成", "左踏步灯", "右踏步灯", "室内顶灯左",
    "室内顶灯右", "左阀读灯", "右阀读灯", "倒车灯", "制动灯", "主车左转向灯",
    "主车右转向灯", "挂车左转向灯", "挂车右转向灯", "侧转向", "左日间行车灯",
    "右日间行车灯", "接T15分线器", "ADR紧急电源故障指示灯", "ADR工作指示灯",

    // Control units and modules
    "集成式ADR控制单元", "ADR集成式室内开关", "ADR集成式室外开关", "空调控制器",
    "电源模块", "中控屏", "四方位主机", "外置功放", "前桥模块", "后桥模块",
    "挂车控制模块", "前桥模块（EPM）", "后桥模块（EPM）", "智能中控屏", "ECAS控制器",

    // Power and fuses
    "100A慢熔", "50A慢熔", "150A慢熔", "15A快熔", "On 10 A保险", "5A快熔",
    "7.5A快熔", "20A快熔", "10A", "30A", "200A", "快熔", "慢熔", "保险", "电源模块",
    "12V电源", "5V电源", "传感器地", "电源地", "司机侧地", "乘客侧地", "GND",
    "接0501A", "接ON档", "接ACC档", "接0N档继电器2", "司机侧供电", "乘客侧供电",
    "B-CANL", "B-CAN_H", "CAN L", "CAN H", "D+/励磁", "ACC电源", "蓄电池电源",

    // Harnesses and connectors
    "线束2端子接插件", "48针插接件", "接插器AM244", "接插器AM245", "接插器AM246",
    "接插器AM215", "接插器AM255", "接插器AM256", "2孔 AT 过渡插接件", "pin 5",
    "SD卡接口", "MIC接口", "收音天线", "定位天线", "4G天线", "遥控闪灯输出",
    "挂车ABS电磁阀电源", "挂车控制器电源", "挂车ABS指示", "电磁阀电源", "系统电源",
    "点火开关输入", "时钟弹簧", "X1线束端", "X2线束端", "X3线束端", "X4线束端",
];
