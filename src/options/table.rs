use super::Disposition::{self, Active, Deprecated, Ignored, Macro};

/// One row of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
	/// Lowercase spelling accepted in source documents.
	pub alias: &'static str,

	/// Keyword written to the generated config.
	pub keyword: &'static str,

	pub disposition: Disposition,
}

const fn entry(alias: &'static str, keyword: &'static str, disposition: Disposition) -> OptionEntry {
	OptionEntry {
		alias,
		keyword,
		disposition,
	}
}

/// Client keywords known to OpenSSH's `readconf.c`, sorted by alias.
///
/// Legacy aliases map onto the keyword that replaced them. `viaproxy` is the
/// only keyword that does not exist in OpenSSH itself.
pub static OPTIONS: &[OptionEntry] = &[
	entry("addkeystoagent", "AddKeysToAgent", Active),
	entry("addressfamily", "AddressFamily", Active),
	entry("afstokenpassing", "AFSTokenPassing", Ignored),
	entry("batchmode", "BatchMode", Active),
	entry("bindaddress", "BindAddress", Active),
	entry("bindinterface", "BindInterface", Active),
	entry("canonicaldomains", "CanonicalDomains", Active),
	entry("canonicalizefallbacklocal", "CanonicalizeFallbackLocal", Active),
	entry("canonicalizehostname", "CanonicalizeHostname", Active),
	entry("canonicalizemaxdots", "CanonicalizeMaxDots", Active),
	entry("canonicalizepermittedcnames", "CanonicalizePermittedCNAMEs", Active),
	entry("casignaturealgorithms", "CASignatureAlgorithms", Active),
	entry("certificatefile", "CertificateFile", Active),
	entry("challengeresponseauthentication", "KbdInteractiveAuthentication", Active),
	entry("channeltimeout", "ChannelTimeout", Active),
	entry("checkhostip", "CheckHostIP", Active),
	entry("cipher", "Cipher", Deprecated),
	entry("ciphers", "Ciphers", Active),
	entry("clearallforwardings", "ClearAllForwardings", Active),
	entry("compression", "Compression", Active),
	entry("compressionlevel", "CompressionLevel", Ignored),
	entry("connectionattempts", "ConnectionAttempts", Active),
	entry("connecttimeout", "ConnectTimeout", Active),
	entry("controlmaster", "ControlMaster", Active),
	entry("controlpath", "ControlPath", Active),
	entry("controlpersist", "ControlPersist", Active),
	entry("dsaauthentication", "PubkeyAuthentication", Active),
	entry("dynamicforward", "DynamicForward", Active),
	entry("enableescapecommandline", "EnableEscapeCommandline", Active),
	entry("enablesshkeysign", "EnableSSHKeysign", Active),
	entry("escapechar", "EscapeChar", Active),
	entry("exitonforwardfailure", "ExitOnForwardFailure", Active),
	entry("fallbacktorsh", "FallBackToRsh", Deprecated),
	entry("fingerprinthash", "FingerprintHash", Active),
	entry("forkafterauthentication", "ForkAfterAuthentication", Active),
	entry("forwardagent", "ForwardAgent", Active),
	entry("forwardx11", "ForwardX11", Active),
	entry("forwardx11timeout", "ForwardX11Timeout", Active),
	entry("forwardx11trusted", "ForwardX11Trusted", Active),
	entry("gatewayports", "GatewayPorts", Active),
	entry("globalknownhostsfile", "GlobalKnownHostsFile", Active),
	entry("globalknownhostsfile2", "GlobalKnownHostsFile2", Deprecated),
	entry("gssapiauthentication", "GSSAPIAuthentication", Active),
	entry("gssapidelegatecredentials", "GSSAPIDelegateCredentials", Active),
	entry("hashknownhosts", "HashKnownHosts", Active),
	entry("hostbasedacceptedalgorithms", "HostbasedAcceptedAlgorithms", Active),
	entry("hostbasedauthentication", "HostbasedAuthentication", Active),
	entry("hostbasedkeytypes", "HostbasedAcceptedAlgorithms", Active),
	entry("hostkeyalgorithms", "HostKeyAlgorithms", Active),
	entry("hostkeyalias", "HostKeyAlias", Active),
	entry("hostname", "HostName", Active),
	entry("identitiesonly", "IdentitiesOnly", Active),
	entry("identityagent", "IdentityAgent", Active),
	entry("identityfile", "IdentityFile", Active),
	entry("identityfile2", "IdentityFile", Active),
	entry("ignoreunknown", "IgnoreUnknown", Active),
	entry("include", "Include", Active),
	entry("ipqos", "IPQoS", Active),
	entry("kbdinteractiveauthentication", "KbdInteractiveAuthentication", Active),
	entry("kbdinteractivedevices", "KbdInteractiveDevices", Active),
	entry("keepalive", "TCPKeepAlive", Active),
	entry("kerberosauthentication", "KerberosAuthentication", Ignored),
	entry("kerberostgtpassing", "KerberosTGTPassing", Ignored),
	entry("kexalgorithms", "KexAlgorithms", Active),
	entry("knownhostscommand", "KnownHostsCommand", Active),
	entry("localcommand", "LocalCommand", Active),
	entry("localforward", "LocalForward", Active),
	entry("loglevel", "LogLevel", Active),
	entry("logverbose", "LogVerbose", Active),
	entry("macs", "MACs", Active),
	entry("nohostauthenticationforlocalhost", "NoHostAuthenticationForLocalhost", Active),
	entry("numberofpasswordprompts", "NumberOfPasswordPrompts", Active),
	entry("obscurekeystroketiming", "ObscureKeystrokeTiming", Active),
	entry("passwordauthentication", "PasswordAuthentication", Active),
	entry("permitlocalcommand", "PermitLocalCommand", Active),
	entry("permitremoteopen", "PermitRemoteOpen", Active),
	entry("pkcs11provider", "PKCS11Provider", Active),
	entry("port", "Port", Active),
	entry("preferredauthentications", "PreferredAuthentications", Active),
	entry("protocol", "Protocol", Ignored),
	entry("proxycommand", "ProxyCommand", Active),
	entry("proxyjump", "ProxyJump", Active),
	entry("proxyusefdpass", "ProxyUseFdpass", Active),
	entry("pubkeyacceptedalgorithms", "PubkeyAcceptedAlgorithms", Active),
	entry("pubkeyacceptedkeytypes", "PubkeyAcceptedAlgorithms", Active),
	entry("pubkeyauthentication", "PubkeyAuthentication", Active),
	entry("rekeylimit", "RekeyLimit", Active),
	entry("remotecommand", "RemoteCommand", Active),
	entry("remoteforward", "RemoteForward", Active),
	entry("requesttty", "RequestTTY", Active),
	entry("requiredrsasize", "RequiredRSASize", Active),
	entry("revokedhostkeys", "RevokedHostKeys", Active),
	entry("rhostsauthentication", "RhostsAuthentication", Deprecated),
	entry("rhostsrsaauthentication", "RhostsRSAAuthentication", Ignored),
	entry("rsaauthentication", "RSAAuthentication", Ignored),
	entry("securitykeyprovider", "SecurityKeyProvider", Active),
	entry("sendenv", "SendEnv", Active),
	entry("serveralivecountmax", "ServerAliveCountMax", Active),
	entry("serveraliveinterval", "ServerAliveInterval", Active),
	entry("sessiontype", "SessionType", Active),
	entry("setenv", "SetEnv", Active),
	entry("skeyauthentication", "KbdInteractiveAuthentication", Active),
	entry("smartcarddevice", "PKCS11Provider", Active),
	entry("stdinnull", "StdinNull", Active),
	entry("streamlocalbindmask", "StreamLocalBindMask", Active),
	entry("streamlocalbindunlink", "StreamLocalBindUnlink", Active),
	entry("stricthostkeychecking", "StrictHostKeyChecking", Active),
	entry("syslogfacility", "SyslogFacility", Active),
	entry("tag", "Tag", Active),
	entry("tcpkeepalive", "TCPKeepAlive", Active),
	entry("tisauthentication", "KbdInteractiveAuthentication", Active),
	entry("tunnel", "Tunnel", Active),
	entry("tunneldevice", "TunnelDevice", Active),
	entry("updatehostkeys", "UpdateHostKeys", Active),
	entry("useprivilegedport", "UsePrivilegedPort", Deprecated),
	entry("user", "User", Active),
	entry("userknownhostsfile", "UserKnownHostsFile", Active),
	entry("userknownhostsfile2", "UserKnownHostsFile2", Deprecated),
	entry("useroaming", "UseRoaming", Deprecated),
	entry("usersh", "UseRsh", Deprecated),
	entry("verifyhostkeydns", "VerifyHostKeyDNS", Active),
	entry("viaproxy", "ViaProxy", Macro),
	entry("visualhostkey", "VisualHostKey", Active),
	entry("xauthlocation", "XAuthLocation", Active),
];

/// Find the table row for `name`, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static OptionEntry> {
	let alias = name.to_ascii_lowercase();
	OPTIONS
		.binary_search_by(|entry| entry.alias.cmp(alias.as_str()))
		.ok()
		.map(|index| &OPTIONS[index])
}
