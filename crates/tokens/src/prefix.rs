//! Keywords that introduce a value.

use crate::token::define_tokens;

define_tokens! {
	/// Keywords followed by an argument, such as `LIMIT offset count` or
	/// `MATCH pattern`.
	pub struct PrefixToken {
		GET = "GET" => ["BITFIELD", "BITFIELD_RO", "SORT", "SORT_RO"],
		INCRBY = "INCRBY" => ["BITFIELD"],
		OVERFLOW = "OVERFLOW" => ["BITFIELD"],
		SET = "SET" => ["BITFIELD"],
		COUNT = "COUNT" => [
			"BLMPOP",
			"BZMPOP",
			"GEORADIUS",
			"GEORADIUSBYMEMBER",
			"GEORADIUSBYMEMBER_RO",
			"GEORADIUS_RO",
			"GEOSEARCH",
			"GEOSEARCHSTORE",
			"HSCAN",
			"LMPOP",
			"LPOS",
			"SCAN",
			"SSCAN",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
			"XAUTOCLAIM",
			"XINFO STREAM",
			"XRANGE",
			"XREAD",
			"XREADGROUP",
			"XREVRANGE",
			"ZMPOP",
			"ZSCAN",
		],
		ADDR = "ADDR" => ["CLIENT KILL"],
		IDENTIFIER = "ID" => ["CLIENT KILL", "CLIENT LIST"],
		LADDR = "LADDR" => ["CLIENT KILL"],
		SKIPME = "SKIPME" => ["CLIENT KILL"],
		TYPE = "TYPE" => ["CLIENT KILL", "CLIENT LIST", "SCAN"],
		USER = "USER" => ["CLIENT KILL"],
		LIB_NAME = "LIB-NAME" => ["CLIENT SETINFO"],
		LIB_VER = "LIB-VER" => ["CLIENT SETINFO"],
		PREFIX = "PREFIX" => ["CLIENT TRACKING"],
		REDIRECT = "REDIRECT" => ["CLIENT TRACKING"],
		IMPORTING = "IMPORTING" => ["CLUSTER SETSLOT"],
		MIGRATING = "MIGRATING" => ["CLUSTER SETSLOT"],
		NODE = "NODE" => ["CLUSTER SETSLOT"],
		ACLCAT = "ACLCAT" => ["COMMAND LIST"],
		FILTERBY = "FILTERBY" => ["COMMAND LIST"],
		MODULE = "MODULE" => ["COMMAND LIST"],
		PATTERN = "PATTERN" => ["COMMAND LIST"],
		DB = "DB" => ["COPY"],
		TIMEOUT = "TIMEOUT" => ["FAILOVER"],
		TO = "TO" => ["FAILOVER"],
		LIBRARYNAME = "LIBRARYNAME" => ["FUNCTION LIST"],
		STORE = "STORE" => ["GEORADIUS", "GEORADIUSBYMEMBER", "SORT"],
		STOREDIST = "STOREDIST" => ["GEORADIUS", "GEORADIUSBYMEMBER"],
		BYBOX = "BYBOX" => ["GEOSEARCH", "GEOSEARCHSTORE"],
		BYRADIUS = "BYRADIUS" => ["GEOSEARCH", "GEOSEARCHSTORE"],
		FROMLONLAT = "FROMLONLAT" => ["GEOSEARCH", "GEOSEARCHSTORE"],
		FROMMEMBER = "FROMMEMBER" => ["GEOSEARCH", "GEOSEARCHSTORE"],
		EX = "EX" => ["GETEX", "SET"],
		EXAT = "EXAT" => ["GETEX", "SET"],
		PX = "PX" => ["GETEX", "SET"],
		PXAT = "PXAT" => ["GETEX", "SET"],
		AUTH = "AUTH" => ["HELLO", "MIGRATE"],
		SETNAME = "SETNAME" => ["HELLO"],
		MATCH = "MATCH" => ["HSCAN", "SCAN", "SSCAN", "ZSCAN"],
		MINMATCHLEN = "MINMATCHLEN" => ["LCS"],
		VERSION = "VERSION" => ["LOLWUT"],
		MAXLEN = "MAXLEN" => ["LPOS"],
		RANK = "RANK" => ["LPOS"],
		SAMPLES = "SAMPLES" => ["MEMORY USAGE"],
		AUTH2 = "AUTH2" => ["MIGRATE"],
		KEYS = "KEYS" => ["MIGRATE"],
		ARGS = "ARGS" => ["MODULE LOADEX"],
		CONFIG = "CONFIG" => ["MODULE LOADEX"],
		FREQ = "FREQ" => ["RESTORE", "RESTORE-ASKING"],
		IDLETIME = "IDLETIME" => ["RESTORE", "RESTORE-ASKING"],
		LIMIT = "LIMIT" => [
			"SINTERCARD",
			"SORT",
			"SORT_RO",
			"XADD",
			"XTRIM",
			"ZINTERCARD",
			"ZRANGE",
			"ZRANGEBYLEX",
			"ZRANGEBYSCORE",
			"ZRANGESTORE",
			"ZREVRANGEBYLEX",
			"ZREVRANGEBYSCORE",
		],
		BY = "BY" => ["SORT", "SORT_RO"],
		IDLE = "IDLE" => ["XCLAIM", "XPENDING"],
		LASTID = "LASTID" => ["XCLAIM"],
		RETRYCOUNT = "RETRYCOUNT" => ["XCLAIM"],
		TIME = "TIME" => ["XCLAIM"],
		ENTRIESREAD = "ENTRIESREAD" => ["XGROUP CREATE", "XGROUP SETID"],
		BLOCK = "BLOCK" => ["XREAD", "XREADGROUP"],
		STREAMS = "STREAMS" => ["XREAD", "XREADGROUP"],
		GROUP = "GROUP" => ["XREADGROUP"],
		ENTRIESADDED = "ENTRIESADDED" => ["XSETID"],
		MAXDELETEDID = "MAXDELETEDID" => ["XSETID"],
		AGGREGATE = "AGGREGATE" => ["ZINTER", "ZINTERSTORE", "ZUNION", "ZUNIONSTORE"],
		WEIGHTS = "WEIGHTS" => ["ZINTER", "ZINTERSTORE", "ZUNION", "ZUNIONSTORE"],
		INDENT = "INDENT" => ["JSON.GET"],
		NEWLINE = "NEWLINE" => ["JSON.GET"],
		SPACE = "SPACE" => ["JSON.GET"],
		EXPANSION = "EXPANSION" => ["BF.INSERT", "BF.RESERVE", "CF.RESERVE"],
		CAPACITY = "CAPACITY" => ["BF.INSERT", "CF.INSERT", "CF.INSERTNX"],
		ERROR = "ERROR" => ["BF.INSERT"],
		BUCKETSIZE = "BUCKETSIZE" => ["CF.RESERVE"],
		MAXITERATIONS = "MAXITERATIONS" => ["CF.RESERVE"],
		COMPRESSION = "COMPRESSION" => ["TDIGEST.CREATE"],
		CHUNK_SIZE = "CHUNK_SIZE" => ["TS.ADD", "TS.ALTER", "TS.CREATE", "TS.DECRBY", "TS.INCRBY"],
		DUPLICATE_POLICY = "DUPLICATE_POLICY" => ["TS.ALTER", "TS.CREATE"],
		ENCODING = "ENCODING" => ["TS.ADD", "TS.CREATE"],
		LABELS = "LABELS" => ["TS.ADD", "TS.ALTER", "TS.CREATE", "TS.DECRBY", "TS.INCRBY"],
		RETENTION = "RETENTION" => ["TS.ADD", "TS.ALTER", "TS.CREATE", "TS.DECRBY", "TS.INCRBY"],
		ON_DUPLICATE = "ON_DUPLICATE" => ["TS.ADD"],
		TIMESTAMP = "TIMESTAMP" => ["TS.DECRBY", "TS.INCRBY"],
		AGGREGATION = "AGGREGATION" => [
			"TS.CREATERULE",
			"TS.MRANGE",
			"TS.MREVRANGE",
			"TS.RANGE",
			"TS.REVRANGE",
		],
		ALIGN = "ALIGN" => ["TS.MRANGE", "TS.MREVRANGE", "TS.RANGE", "TS.REVRANGE"],
		FILTER_BY_TS = "FILTER_BY_TS" => ["TS.MRANGE", "TS.MREVRANGE", "TS.RANGE", "TS.REVRANGE"],
		FILTER = "FILTER" => ["TS.MGET", "TS.MRANGE", "TS.MREVRANGE"],
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::Token;
	use crate::TokenKey;

	#[test]
	fn test_members_never_collide() {
		let keys: HashSet<TokenKey> = PrefixToken::ALL.iter().map(|&t| TokenKey::from(t)).collect();
		assert_eq!(keys.len(), PrefixToken::ALL.len());
	}

	#[test]
	fn test_values_are_canonical() {
		for token in PrefixToken::ALL {
			assert_eq!(token.as_str(), token.as_str().to_uppercase(), "{token:?}");
		}
	}

	#[test]
	fn test_hyphenated_values() {
		assert_eq!(PrefixToken::LIB_NAME.as_bytes(), b"LIB-NAME");
		assert_eq!(PrefixToken::lookup("lib-name"), Some(PrefixToken::LIB_NAME));
		assert!(PrefixToken::lookup("lib_name").is_none());
	}
}
