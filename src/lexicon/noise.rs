//! Noise phrases, noise patterns, and topic keywords.
//!
//! Three curated lists drive the classifier and the trimmer:
//!
//! * [`NOISE_PHRASES`] — a line *containing* any of these is noise.  The
//!   list covers filler syllables, apologies, off-topic chatter, and the
//!   small-talk that clusters at the start and end of every recording.
//! * [`NOISE_PATTERNS`] — anchored regexes for structural noise the phrase
//!   list cannot express (timestamp-plus-filler lines, repeated filler runs).
//! * [`TOPIC_KEYWORDS`] — words that mark a line as plausible lecture
//!   material.  One shared constant, used identically by the forward and
//!   backward edge scans.

use lazy_static::lazy_static;
use regex::Regex;

/// Substring markers for noise lines.  Curated by hand from real
/// transcripts; ordering is irrelevant (pure OR).
pub static NOISE_PHRASES: &[&str] = &[
    "对不起",
    "加油",
    "嗯嗯",
    "嘘嘘",
    "嗯",
    "啊",
    "这个这个",
    "那个那个",
    "等一会儿",
    "让我重新",
    "能不能",
    "听不到",
    "你让我",
    "找到吗",
    "不好意思",
    "没事",
    "随便",
    "眼睛",
    "不是",
    "没有",
    "什么",
    "怎么",
    "为什么",
    "哪里",
    "多少",
    "多少回",
    "卖这个事情",
    "不想脸",
    "抖音",
    "直接问",
    "到底",
    "直接捡到",
    "老师就",
    "欢迎坚持",
    "几点",
    "明明白",
    "中一年",
    "不行",
    "走没有",
    "听不是",
    "不能坚果",
    "都西好",
    "做成一家应家",
    "发展费",
    "不变变了",
    "不愿意再看",
    "随便的眼睛",
    // trailing chatter seen at the end of recordings
    "生活的中要",
    "如果你不说",
    "还把拿的手子",
    "去年秋季的头产",
    "年趋势",
    "查烧竹",
    "放的么",
    "熟猪",
    "还好吧",
    "没什么意思",
    "一直所以",
    "我上回那别来",
    "北京也好吃的",
    "都是",
    "你说可以",
    "反正也没意思",
    "一年一年给吃",
    "我饭就不吃了",
    "你们那不如",
    "我们家努力不服",
    "亲个么么哒",
    "一嘘",
    "刚我们家",
    "小嗯",
    "有我们你更清了",
    "提供珍惜",
    "我写作",
    "是是嗯嘘",
    "嗯爱很好",
    "放心",
    "来亲个",
    "么么哒",
];

/// Words that mark a line as plausible lecture content.
pub static TOPIC_KEYWORDS: &[&str] = &[
    "CSP", "课程", "上课", "系统", "计算机", "我们", "大家", "这个", "那个",
];

lazy_static! {
    /// Structural noise patterns, anchored at the start of the line.
    pub static ref NOISE_PATTERNS: Vec<Regex> = vec![
        // timestamp digits followed only by filler particles
        Regex::new(r"^[0-9:]+[嗯啊这那]*$").expect("noise pattern"),
        // duplicated cheering
        Regex::new(r"^加油加油").expect("noise pattern"),
        // runs of the filler syllable
        Regex::new(r"^嗯嗯嗯").expect("noise pattern"),
    ];
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
