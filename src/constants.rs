/// 消息结束标记。
/// 以与正文相同的规则 (每字符 8 bits，高位在前) 序列化后附加在比特流末尾，
/// 解码时一旦在已恢复的文本中出现即停止读取。
pub const TERMINATOR: &str = "####END####";

/// 每个字符序列化后占用的比特数。
pub const BITS_PER_CHAR: usize = 8;

/// 每个像素从比特流中消耗的比特数。
/// 无论像素实际有几个可写通道，编码游标每个像素都前进 3 位；
/// 灰度像素只写入第一位，其余两位被丢弃。
pub const BITS_PER_PIXEL: usize = 3;

/// 允许嵌入的最大码点 (ASCII)。超出的字符会在序列化前被静默丢弃。
pub const MAX_ASCII: u32 = 127;

/// 8 位通道深度下的峰值信号值，用于 PSNR 计算。
pub const PEAK_SIGNAL: f64 = 255.0;

/// 文本文件开头可能出现的字节顺序标记。
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';
