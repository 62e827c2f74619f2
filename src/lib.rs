//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___|  ___  _ __
// | |_) | |_) / _` \ \/\ / / _ \ | |  _  / _ \| '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| ||  __/| | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____| \___||_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-17
// Version : 0.1.0
// License : Mulan PSL v2
//
// Library root

pub mod configtool;
pub mod notify;
pub mod passgen;
pub mod session;
pub mod setclip;
pub mod stats;
pub mod strength;
